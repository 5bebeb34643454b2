//! Configuration schema types for Professor Geral.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the web app shipped with.

mod model;
mod session;
mod system;

pub use model::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ProfessorConfig {
    pub session: SessionSettings,
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}
