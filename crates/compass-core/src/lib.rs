//! Business logic for Career Compass.
//!
//! The centerpiece is [`format`], the response formatter that turns the
//! advice backend's markdown-like text into structured blocks. Around it:
//! ad storage/filtering/rotation, the submission flow with its input
//! guards, and the trait seams ([`advice::provider::AdviceProvider`],
//! [`advice::location::LocationSource`], [`auth::CredentialVerifier`])
//! whose concrete implementations live in compass-infra.

pub mod ads;
pub mod advice;
pub mod auth;
pub mod format;
pub mod stats;
