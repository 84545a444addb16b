//! Concrete adapters for Career Compass.
//!
//! Implements the compass-core trait seams against the outside world:
//! the Gemini advice backend, IP-based geolocation, the placeholder
//! credential check, and the toml config loader.

pub mod auth;
pub mod config;
pub mod gemini;
pub mod geo;
