//! Classification of raw provider failures.
//!
//! The rate-limit signature is the only pattern matching applied to
//! provider error text, and it does not leave this module. Text that
//! almost matches degrades to [`GenerationError::Provider`] with the
//! raw detail preserved, so nothing is lost when a provider rewords
//! its throttling message.

use crate::errors::GenerationError;
use regex::Regex;
use std::sync::OnceLock;

// Matches e.g. "Rate limit reached for model command-r-plus.
// Please try again in 1m23.45s."
static RATE_LIMIT: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)]
fn rate_limit_pattern() -> &'static Regex {
    RATE_LIMIT.get_or_init(|| {
        Regex::new(r"Rate limit reached.*?\bin\s+(\d+m\d+\.\d+s)")
            .expect("rate limit pattern is valid")
    })
}

impl GenerationError {
    /// Classifies raw provider error text.
    ///
    /// Text carrying the provider's throttling signature becomes
    /// [`GenerationError::RateLimited`] with the reported wait
    /// duration captured verbatim, never parsed into a numeric
    /// duration. Everything else becomes
    /// [`GenerationError::Provider`].
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if let Some(captures) = rate_limit_pattern().captures(raw) {
            if let Some(duration) = captures.get(1) {
                return Self::rate_limited(duration.as_str());
            }
        }
        Self::provider(raw)
    }
}
