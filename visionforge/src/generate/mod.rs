//! The text-generation boundary.
//!
//! Everything provider-specific sits behind [`TextGenerator`]: the
//! pipeline hands a rendered prompt in and gets generated text or a
//! classified [`GenerationError`] back. No retries happen here; a
//! failure goes straight to the review gate.

mod classify;
#[cfg(feature = "cohere")]
mod cohere;

#[cfg(feature = "cohere")]
pub use cohere::CohereGenerator;

use crate::errors::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Model identifier used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "command-r-plus";

/// A single request to the generation capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The fully rendered prompt.
    pub prompt: String,
    /// Model identifier understood by the provider.
    pub model: String,
    /// Sampling temperature, `0.0` focused through `1.0` creative.
    pub temperature: f32,
}

impl GenerationRequest {
    /// Creates a request against the default model.
    #[must_use]
    pub fn new(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature,
        }
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// The black-box text-generation capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for the request.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::RateLimited`] when the provider
    /// throttled the call, [`GenerationError::Provider`] for anything
    /// else.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
