//! Gemini advice backend adapter.

mod client;
mod types;

pub use client::GeminiAdviceProvider;
