//! Google Gemini API client.
//!
//! Implements `ChatBackend` for Gemini models via the Generative Language
//! API's streaming endpoint.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
