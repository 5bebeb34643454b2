//! Professor Geral configuration.
//!
//! TOML-based configuration for the lesson defaults, the Gemini model and
//! logging. Every section has defaults, so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use professor_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.model.name);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ProfessorConfig;

use professor_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating it when missing.
pub fn load_config() -> Result<ProfessorConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path, or the platform default when `None`.
pub fn load_config_from(path: Option<&Path>) -> Result<ProfessorConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => load_config(),
    }
}
