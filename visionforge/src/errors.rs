//! Error types for the requirements pipeline.
//!
//! The taxonomy separates caller mistakes (`InputError`), template
//! wiring bugs (`TemplateError`), and provider failures
//! (`GenerationError`). `PipelineError` is the top-level type a run
//! returns.

use crate::stage::StageName;
use thiserror::Error;

/// The main error type for pipeline runs.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// The caller supplied unusable input.
    #[error("{0}")]
    Input(#[from] InputError),

    /// A stage template could not be rendered.
    #[error("{0}")]
    Template(#[from] TemplateError),

    /// The reviewer stopped the run while a stage attempt was failing.
    #[error("Pipeline halted at {stage} stage: {source}")]
    Halted {
        /// The stage whose attempt was failing when the run stopped.
        stage: StageName,
        /// The generation failure on display at the gate.
        source: GenerationError,
    },

    /// The reviewer abandoned the run.
    #[error("Run abandoned at {stage} stage")]
    Abandoned {
        /// The stage whose candidate was under review.
        stage: StageName,
    },
}

/// Error raised when the project description is missing or blank.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct InputError {
    /// The human-readable warning.
    pub message: String,
}

impl InputError {
    /// Creates a new input error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The warning shown when a run is requested with no description.
    #[must_use]
    pub fn empty_description() -> Self {
        Self::new("Please enter a project description.")
    }
}

/// Error raised when a stage template references an input that was
/// not provided.
///
/// Inputs are wired from the previous stage's approved output, so a
/// missing one is a programming error rather than an operator mistake.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{stage} template is missing required input '{placeholder}'")]
pub struct TemplateError {
    /// The stage whose template failed to render.
    pub stage: StageName,
    /// The placeholder with no matching input.
    pub placeholder: String,
}

impl TemplateError {
    /// Creates a new template error.
    #[must_use]
    pub fn new(stage: StageName, placeholder: impl Into<String>) -> Self {
        Self {
            stage,
            placeholder: placeholder.into(),
        }
    }
}

/// Errors produced at the text-generation boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// The provider throttled the call and reported how long to wait.
    #[error("API call Rate limit exceeded. Please try again in {retry_after}.")]
    RateLimited {
        /// The wait duration exactly as the provider reported it.
        retry_after: String,
    },

    /// Any other provider failure.
    #[error("Generation failed: {detail}")]
    Provider {
        /// The provider's error text, unmodified.
        detail: String,
    },
}

impl GenerationError {
    /// Creates a rate-limited error.
    #[must_use]
    pub fn rate_limited(retry_after: impl Into<String>) -> Self {
        Self::RateLimited {
            retry_after: retry_after.into(),
        }
    }

    /// Creates a provider error.
    #[must_use]
    pub fn provider(detail: impl Into<String>) -> Self {
        Self::Provider {
            detail: detail.into(),
        }
    }

    /// Returns true when the failure is transient throttling.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_description_message() {
        let err = InputError::empty_description();
        assert_eq!(err.to_string(), "Please enter a project description.");
    }

    #[test]
    fn test_template_error_display() {
        let err = TemplateError::new(StageName::ProjectManager, "project_description");
        assert_eq!(
            err.to_string(),
            "Project Manager template is missing required input 'project_description'"
        );
    }

    #[test]
    fn test_rate_limited_display() {
        let err = GenerationError::rate_limited("1m23.45s");
        assert_eq!(
            err.to_string(),
            "API call Rate limit exceeded. Please try again in 1m23.45s."
        );
        assert!(err.is_rate_limited());
    }

    #[test]
    fn test_provider_error_preserves_detail() {
        let err = GenerationError::provider("connection reset");
        assert_eq!(err.to_string(), "Generation failed: connection reset");
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_input_error_converts_to_pipeline_error() {
        let err: PipelineError = InputError::empty_description().into();
        assert!(matches!(err, PipelineError::Input(_)));
    }

    #[test]
    fn test_halted_carries_the_failure() {
        let err = PipelineError::Halted {
            stage: StageName::Documentation,
            source: GenerationError::provider("boom"),
        };
        assert_eq!(
            err.to_string(),
            "Pipeline halted at Documentation stage: Generation failed: boom"
        );
    }
}
