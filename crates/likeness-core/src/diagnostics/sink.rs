//! Diagnostic sinks
//!
//! A sink accepts lines of text and must never fail: a broken output
//! channel cannot be allowed to turn a comparison into a crash. The
//! comparator additionally guards every call with `catch_unwind`.

use likeness_core_types::schema::EVENT_DIAGNOSTIC;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

/// Line-oriented diagnostic output.
pub trait DiagnosticSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Shared handle to a sink, as held by a `Comparer`.
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Write a line, swallowing any panic raised by the sink.
pub(crate) fn emit(sink: &dyn DiagnosticSink, line: &str) {
    let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.write_line(line)));
}

/// Plain standard output; the fallback when nothing else is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{}", line);
    }
}

/// Emits each line as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(
            component = module_path!(),
            event = EVENT_DIAGNOSTIC,
            line = line,
        );
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn write_line(&self, _line: &str) {}
}

/// Keeps lines in memory for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// All lines joined with newlines
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }

    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .map(|mut lines| lines.push(line.to_string()))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PanickingSink;

    impl DiagnosticSink for PanickingSink {
        fn write_line(&self, _line: &str) {
            panic!("output channel disconnected");
        }
    }

    #[test]
    fn test_memory_sink_collects_lines() {
        let sink = MemorySink::new();
        emit(&sink, "first");
        emit(&sink, "second");
        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert!(sink.contains("sec"));
        sink.clear();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let sink = MemorySink::new();
        let clone = sink.clone();
        clone.write_line("shared");
        assert_eq!(sink.text(), "shared");
    }

    #[test]
    fn test_panicking_sink_is_swallowed() {
        emit(&PanickingSink, "ignored");
    }
}
