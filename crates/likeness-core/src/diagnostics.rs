//! Diagnostic output for failed comparisons
//!
//! Diagnostics are a side channel: they describe why a comparison failed
//! but never influence its outcome.
//!
//! - [`sink`]: where lines go (stdout, `tracing`, memory, nowhere)
//! - [`render`]: turning values into text that never fails

pub mod render;
pub mod sink;

pub use render::{describe, describe_debug, snapshot, UNRENDERABLE};
pub use sink::{DiagnosticSink, MemorySink, NullSink, SharedSink, StdoutSink, TracingSink};
