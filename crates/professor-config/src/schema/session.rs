//! Lesson settings applied to every new chat session.

use professor_common::DepthLevel;
use serde::{Deserialize, Serialize};

/// Startup values for the lesson settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SessionSettings {
    /// concise, detailed or academic. Unknown values read as detailed.
    pub depth_level: DepthLevel,
    /// Let the model consult Google Search and cite its sources.
    pub use_search_grounding: bool,
}
