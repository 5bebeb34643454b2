//! Validation for the `[model]` section.

use crate::schema::ProfessorConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate model name and sampling constraints.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &ProfessorConfig) {
    if config.model.name.trim().is_empty() {
        errors.push("model.name must not be empty".into());
    }
    validate_range_f64(
        errors,
        "model.temperature",
        config.model.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "model.max_output_tokens",
        config.model.max_output_tokens,
        1,
        65536,
    );
}
