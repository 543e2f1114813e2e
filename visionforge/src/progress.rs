//! Progress notifications for long-running runs.
//!
//! Sinks are synchronous and fire-and-forget: a notification must
//! never block the run or surface an error into it. The pipeline
//! sends one message per stage, just before that stage's first
//! generation call.

use tracing::{debug, info, Level};

/// Receives one-line status messages as the pipeline moves between
/// stages.
pub trait ProgressSink: Send + Sync {
    /// Delivers a status message. Must not block or panic.
    fn notify(&self, message: &str);
}

/// Discards all messages. The default when no sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ProgressSink for NoOpProgress {
    fn notify(&self, _message: &str) {}
}

/// Logs messages through the tracing framework.
#[derive(Debug, Clone)]
pub struct LoggingProgress {
    level: Level,
}

impl Default for LoggingProgress {
    fn default() -> Self {
        Self {
            level: Level::INFO,
        }
    }
}

impl LoggingProgress {
    /// Creates a sink logging at the given level.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level sink.
    #[must_use]
    pub const fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    /// Creates an info-level sink.
    #[must_use]
    pub const fn info() -> Self {
        Self::new(Level::INFO)
    }
}

impl ProgressSink for LoggingProgress {
    fn notify(&self, message: &str) {
        match self.level {
            Level::DEBUG => debug!(status = %message, "Progress: {}", message),
            _ => info!(status = %message, "Progress: {}", message),
        }
    }
}

/// Collects messages for inspection in tests.
#[derive(Debug, Default)]
pub struct CollectingProgress {
    messages: parking_lot::RwLock<Vec<String>>,
}

impl CollectingProgress {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().clone()
    }

    /// Number of messages received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    /// Returns true when nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }

    /// Drops everything collected so far.
    pub fn clear(&self) {
        self.messages.write().clear();
    }
}

impl ProgressSink for CollectingProgress {
    fn notify(&self, message: &str) {
        self.messages.write().push(message.to_string());
    }
}

/// Adapts a closure into a sink, the shape UI status callbacks take.
pub struct ProgressFn<F>
where
    F: Fn(&str) + Send + Sync,
{
    func: F,
}

impl<F> ProgressFn<F>
where
    F: Fn(&str) + Send + Sync,
{
    /// Wraps the closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> ProgressSink for ProgressFn<F>
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        (self.func)(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_noop_progress() {
        let sink = NoOpProgress;
        sink.notify("ignored");
        // Should not panic
    }

    #[test]
    fn test_logging_progress() {
        let sink = LoggingProgress::debug();
        sink.notify("Project Manager Agent: Analyzing project description...");
        LoggingProgress::info().notify("still fine");
        // Should not panic
    }

    #[test]
    fn test_collecting_progress() {
        let sink = CollectingProgress::new();
        assert!(sink.is_empty());

        sink.notify("first");
        sink.notify("second");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_collecting_progress_clear() {
        let sink = CollectingProgress::new();
        sink.notify("message");
        assert_eq!(sink.len(), 1);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_progress_fn_invokes_callback() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let sink = ProgressFn::new(move |_message| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sink.notify("one");
        sink.notify("two");

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
