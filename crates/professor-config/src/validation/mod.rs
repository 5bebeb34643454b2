//! Full configuration validation.
//!
//! Validates numeric ranges and collects every problem into a single
//! `ConfigError` instead of stopping at the first one.

mod helpers;
mod model;


use crate::schema::ProfessorConfig;
use professor_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ProfessorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
