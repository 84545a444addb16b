use thiserror::Error;

use crate::ad::AdId;

/// Errors from the advice backend boundary.
///
/// The backend exposes no structured error codes; everything collapses to
/// a generic failure carrying the transport detail for the logs.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("advice backend request failed: {0}")]
    Backend(String),
}

/// Errors detected before or during a submission.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("input is empty")]
    EmptyInput,

    #[error("input too long: {chars} characters (limit {limit})")]
    OversizedInput { chars: usize, limit: usize },

    #[error(transparent)]
    Backend(#[from] AdviceError),
}

/// Errors from ad store operations.
#[derive(Debug, Error)]
pub enum AdError {
    #[error("ad needs an image url or a title")]
    MissingContent,

    #[error("ad needs a link url")]
    MissingLink,

    #[error("invalid country code: '{0}'")]
    InvalidCountry(String),

    #[error("ad {0} not found")]
    NotFound(AdId),
}

/// Errors from the admin login check.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_error_display() {
        let err = SubmissionError::OversizedInput {
            chars: 1501,
            limit: 1500,
        };
        assert!(err.to_string().contains("1501"));
        assert!(err.to_string().contains("1500"));
    }

    #[test]
    fn test_advice_error_wraps_into_submission_error() {
        let err: SubmissionError = AdviceError::Backend("timeout".to_string()).into();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_ad_error_display() {
        let err = AdError::NotFound(AdId(7));
        assert_eq!(err.to_string(), "ad 7 not found");
    }
}
