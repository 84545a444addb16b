//! AdviceProvider trait definition.
//!
//! The abstraction over the generative backend that answers career
//! questions. Uses native async fn in traits (RPITIT); the concrete
//! implementation lives in compass-infra.

use compass_types::advice::{AdviceRequest, AdviceResponse};
use compass_types::error::AdviceError;

/// Trait for advice backends.
///
/// A single non-streaming call: the user's situation goes out, advice
/// text plus grounded citations come back. Failures carry no structured
/// code -- the boundary signal is a generic [`AdviceError::Backend`].
pub trait AdviceProvider: Send + Sync {
    /// Human-readable backend name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send a request and await the full response.
    fn advise(
        &self,
        request: &AdviceRequest,
    ) -> impl std::future::Future<Output = Result<AdviceResponse, AdviceError>> + Send;
}
