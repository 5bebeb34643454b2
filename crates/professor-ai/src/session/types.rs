//! Session configuration types.

use professor_common::DepthLevel;

/// Lesson settings a session is built from. A new value means a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub use_search_grounding: bool,
    pub depth_level: DepthLevel,
}

impl SessionConfig {
    pub fn new(depth_level: DepthLevel, use_search_grounding: bool) -> Self {
        Self {
            use_search_grounding,
            depth_level,
        }
    }

    pub fn with_depth(mut self, depth_level: DepthLevel) -> Self {
        self.depth_level = depth_level;
        self
    }

    pub fn with_search(mut self, use_search_grounding: bool) -> Self {
        self.use_search_grounding = use_search_grounding;
        self
    }
}

/// Model parameters shared by every session of a context.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSettings {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            max_output_tokens: 8192,
        }
    }
}

impl ModelSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}
