//! Generative model configuration.

use serde::{Deserialize, Serialize};

/// Which Gemini model answers and how it samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Output cap per answer (valid range: 1-65536).
    pub max_output_tokens: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".into(),
            temperature: 0.7,
            max_output_tokens: 8192,
        }
    }
}
