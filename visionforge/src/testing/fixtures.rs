//! Shared fixtures for pipeline tests.

use crate::errors::GenerationError;

/// A short project description that passes input validation.
#[must_use]
pub fn grocery_description() -> &'static str {
    "Build a mobile app for grocery delivery"
}

/// Canned stage outputs for a clean four-stage run, in pipeline order.
pub const STAGE_TEXTS: [&str; 4] = [
    "Instructions for gathering requirements.",
    "Initial requirements from interviews.",
    "Refined and categorized requirements.",
    "Final requirements document.",
];

/// Script that completes each stage on the first attempt.
#[must_use]
pub fn four_stage_script() -> Vec<Result<String, GenerationError>> {
    STAGE_TEXTS.iter().map(|text| Ok((*text).to_string())).collect()
}
