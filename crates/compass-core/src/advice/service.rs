//! Guarded submission flow.
//!
//! Local guards run before any network call: empty input and oversized
//! input ("complex case") block the submission outright. Backend failure
//! is logged here and surfaced as the generic error; there is no retry
//! and no partial result.

use tracing::{info, warn};

use compass_types::advice::{AdviceRequest, AdviceResponse, GeoPoint};
use compass_types::error::SubmissionError;
use compass_types::language::Language;

use crate::advice::provider::AdviceProvider;

/// Shown in place of advice when the backend answers with no text at all.
pub const FALLBACK_TEXT: &str =
    "I'm sorry, I couldn't generate a response. Please try rephrasing your thoughts.";

/// The submission operation over a concrete advice backend.
pub struct AdviceService<P: AdviceProvider> {
    provider: P,
    max_input_chars: usize,
}

impl<P: AdviceProvider> AdviceService<P> {
    pub fn new(provider: P, max_input_chars: usize) -> Self {
        Self {
            provider,
            max_input_chars,
        }
    }

    /// The configured "complex case" threshold, in characters.
    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    /// Submit the user's situation to the advice backend.
    ///
    /// Guards, in order:
    /// - whitespace-only input never reaches the backend (`EmptyInput`);
    /// - input over the character limit never reaches the backend
    ///   (`OversizedInput`; the caller renders the complex-case message).
    ///   Input of exactly the limit proceeds.
    pub async fn submit(
        &self,
        situation: &str,
        location: Option<GeoPoint>,
        language: Language,
    ) -> Result<AdviceResponse, SubmissionError> {
        if situation.trim().is_empty() {
            return Err(SubmissionError::EmptyInput);
        }

        let chars = situation.chars().count();
        if chars > self.max_input_chars {
            info!(chars, limit = self.max_input_chars, "complex case, skipping backend");
            return Err(SubmissionError::OversizedInput {
                chars,
                limit: self.max_input_chars,
            });
        }

        let request = AdviceRequest {
            situation: situation.to_string(),
            location,
            language,
        };

        let response = self.provider.advise(&request).await.map_err(|err| {
            warn!(backend = self.provider.name(), error = %err, "advice call failed");
            err
        })?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use compass_types::advice::Citation;
    use compass_types::advice::CitationKind;
    use compass_types::error::AdviceError;

    /// Fake backend that counts calls and returns a canned answer.
    struct CountingProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingProvider {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AdviceProvider for &CountingProvider {
        fn name(&self) -> &str {
            "counting"
        }

        async fn advise(&self, request: &AdviceRequest) -> Result<AdviceResponse, AdviceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AdviceError::Backend("boom".to_string()));
            }
            Ok(AdviceResponse {
                text: Some(format!("## Advice\nfor: {}", request.situation)),
                citations: vec![Citation {
                    kind: CitationKind::Web,
                    uri: "https://example.com".to_string(),
                    title: "Example".to_string(),
                }],
            })
        }
    }

    #[tokio::test]
    async fn whitespace_only_input_is_rejected_without_a_call() {
        let provider = CountingProvider::new(false);
        let service = AdviceService::new(&provider, 1500);

        let result = service.submit("   \n\t", None, Language::En).await;
        assert!(matches!(result, Err(SubmissionError::EmptyInput)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn oversized_input_never_triggers_the_call() {
        let provider = CountingProvider::new(false);
        let service = AdviceService::new(&provider, 1500);

        let input = "x".repeat(1501);
        let result = service.submit(&input, None, Language::En).await;
        assert!(matches!(
            result,
            Err(SubmissionError::OversizedInput {
                chars: 1501,
                limit: 1500,
            })
        ));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn input_at_exactly_the_limit_goes_through() {
        let provider = CountingProvider::new(false);
        let service = AdviceService::new(&provider, 1500);

        let input = "x".repeat(1500);
        let response = service.submit(&input, None, Language::En).await.unwrap();
        assert_eq!(provider.call_count(), 1);
        assert!(response.text.unwrap().contains("Advice"));
        assert_eq!(response.citations.len(), 1);
    }

    #[tokio::test]
    async fn backend_failure_surfaces_as_generic_error() {
        let provider = CountingProvider::new(true);
        let service = AdviceService::new(&provider, 1500);

        let result = service.submit("help me", None, Language::Es).await;
        assert!(matches!(result, Err(SubmissionError::Backend(_))));
        assert_eq!(provider.call_count(), 1);
    }
}
