//! Mock generator for tests and benchmarks.

use crate::errors::GenerationError;
use crate::generate::{GenerationRequest, TextGenerator};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process generator that replays a script and records every
/// request it receives.
///
/// With an empty script each call succeeds with a canned completion
/// numbered by call order, so unscripted stages still make progress.
pub struct MockGenerator {
    script: Mutex<VecDeque<Result<String, GenerationError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
    call_count: AtomicUsize,
}

impl MockGenerator {
    /// Creates a mock that answers every call with a canned completion.
    #[must_use]
    pub fn new() -> Self {
        Self::scripted(Vec::new())
    }

    /// Creates a mock that replays `script` in order, then falls back
    /// to canned completions.
    #[must_use]
    pub fn scripted(script: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Queues one successful completion.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.script.lock().push_back(Ok(text.into()));
        self
    }

    /// Queues one failure.
    #[must_use]
    pub fn with_error(self, error: GenerationError) -> Self {
        self.script.lock().push_back(Err(error));
        self
    }

    /// Returns the number of generation calls made so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Every request received so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }

    /// The prompt of the `index`-th call, if it happened.
    #[must_use]
    pub fn prompt(&self, index: usize) -> Option<String> {
        self.requests.lock().get(index).map(|request| request.prompt.clone())
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().push(request.clone());
        let count = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(format!("Mock completion {count}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_script_then_falls_back() {
        let mock = MockGenerator::new()
            .with_text("scripted")
            .with_error(GenerationError::provider("boom"));
        let request = GenerationRequest::new("prompt", 0.4);

        assert_eq!(mock.generate(&request).await.unwrap(), "scripted");
        assert!(mock.generate(&request).await.is_err());
        assert_eq!(mock.generate(&request).await.unwrap(), "Mock completion 3");
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test]
    async fn test_records_requests_in_order() {
        let mock = MockGenerator::new();

        for temperature in [0.1, 0.9] {
            let request = GenerationRequest::new(format!("prompt {temperature}"), temperature);
            mock.generate(&request).await.unwrap();
        }

        assert_eq!(mock.prompt(0).unwrap(), "prompt 0.1");
        assert_eq!(mock.prompt(1).unwrap(), "prompt 0.9");
        assert!(mock.prompt(2).is_none());
    }
}
