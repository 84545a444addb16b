//! GeminiAdviceProvider -- concrete [`AdviceProvider`] for the Generative
//! Language API.
//!
//! Sends a single non-streaming `generateContent` request with the
//! search and maps tools enabled, passing the user's coordinates as a
//! retrieval hint when available.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only
//! exposed while building the request header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use compass_core::advice::provider::AdviceProvider;
use compass_types::advice::{AdviceRequest, AdviceResponse};
use compass_types::error::AdviceError;
use compass_types::language::Language;

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, LatLng, Part, RetrievalConfig, Tool,
    ToolConfig,
};

/// Gemini advice backend.
pub struct GeminiAdviceProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiAdviceProvider {
    /// Create a new provider.
    ///
    /// * `api_key` - Generative Language API key wrapped in SecretString
    /// * `model` - model identifier (e.g. "gemini-2.5-flash")
    pub fn new(api_key: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn to_wire_request(&self, request: &AdviceRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(request)),
                }],
            }],
            tools: vec![Tool::google_search(), Tool::google_maps()],
            tool_config: request.location.map(|point| ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLng {
                        latitude: point.latitude,
                        longitude: point.longitude,
                    },
                },
            }),
        }
    }
}

impl AdviceProvider for GeminiAdviceProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn advise(&self, request: &AdviceRequest) -> Result<AdviceResponse, AdviceError> {
        let body = self.to_wire_request(request);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|err| AdviceError::Backend(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AdviceError::Backend(format!("HTTP {status}: {error_body}")));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| AdviceError::Backend(err.to_string()))?;

        Ok(payload.into_advice())
    }
}

/// Assemble the coaching prompt around the user's situation.
fn build_prompt(request: &AdviceRequest) -> String {
    let language_instruction = match request.language {
        Language::Es => {
            "Your entire response, including all markdown formatting, headings, and content, \
             MUST be in Spanish."
        }
        Language::En => {
            "Your entire response, including all markdown formatting, headings, and content, \
             MUST be in English."
        }
    };

    format!(
        "{language_instruction}\n\n\
         You are \"Career Compass AI\", a highly empathetic, encouraging, and knowledgeable \
         career coach. Your user is currently unemployed and seeking motivation and guidance.\n\n\
         Your primary goals are to:\n\
         1. Acknowledge and validate their feelings and situation based on their input.\n\
         2. Provide actionable, optimistic, and personalized advice.\n\
         3. Suggest a variety of paths they could explore:\n\
            - Switching careers based on their stated or implied skills/experience.\n\
            - Specific job titles to search for.\n\
            - Areas of study or specific online courses.\n\
            - How they could leverage AI tools for their job search or skill development.\n\
            - Ideas for starting a small business or freelance work.\n\
            - Networking strategies, including volunteering or joining local groups.\n\
         4. Use the search and maps tools to ground your suggestions with real, up-to-date, \
         and relevant local information where applicable.\n\n\
         User's situation:\n\
         ---\n\
         {situation}\n\
         ---\n\n\
         Provide a response in well-structured markdown format. Use headings, bullet points, \
         and bold text to make it easy to read. Be compassionate and inspiring.",
        situation = request.situation,
    )
}
