//! Shared domain types for Career Compass.
//!
//! This crate contains the core domain types used across the Compass
//! workspace: advice requests and responses, citations, formatted output
//! blocks, promotional ads, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod ad;
pub mod advice;
pub mod config;
pub mod error;
pub mod format;
pub mod language;
