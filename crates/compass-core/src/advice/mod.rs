//! The advice submission flow: backend and geolocation trait seams plus
//! the guarded submission service.

pub mod location;
pub mod provider;
pub mod service;

pub use location::LocationSource;
pub use provider::AdviceProvider;
pub use service::{AdviceService, FALLBACK_TEXT};
