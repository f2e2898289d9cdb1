//! Progress sink — optional logging collaborator for long analyses.
//!
//! The engine reports coarse progress ("detected 3 candidates", "segment 2/5
//! analyzed") through an injected sink. Sinks never gate control flow: every
//! implementation must be cheap and infallible, and the default is a no-op.

use std::sync::Mutex;

/// Capability interface for progress/error reporting.
///
/// Callers inject an implementation explicitly; there is no ambient global.
pub trait ProgressSink: Send + Sync {
    /// Report a progress message.
    fn info(&self, message: &str);
    /// Report a non-fatal error (e.g. a skipped candidate).
    fn error(&self, message: &str);
}

/// Sink that discards everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Sink that forwards to the `log` crate (`info!` / `error!`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Sink that records messages in memory. Test helper, but exported since
/// downstream consumers use it to assert on analysis progress too.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `(level, message)` pairs recorded so far.
    pub fn messages(&self) -> Vec<(String, String)> {
        self.messages.lock().expect("sink poisoned").clone()
    }
}

impl ProgressSink for MemorySink {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink poisoned")
            .push(("info".to_string(), message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink poisoned")
            .push(("error".to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_levels() {
        let sink = MemorySink::new();
        sink.info("starting");
        sink.error("skipped candidate");
        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].0, "info");
        assert_eq!(messages[1].0, "error");
    }

    #[test]
    fn test_noop_sink_is_silent() {
        // Just exercise the calls; nothing observable should happen.
        let sink = NoopSink;
        sink.info("ignored");
        sink.error("ignored");
    }
}
