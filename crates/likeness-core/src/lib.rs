//! Likeness Core - structural equality for tests
//!
//! This crate decides whether two values, or two collections of values,
//! are "the same" for the purposes of a test, independent of identity and
//! of whatever equality the types themselves define. It includes:
//! - The `Inspect` capability and macros that describe a type's properties
//! - Comparison policies addressing properties with paths like `Lines[].Sku`
//! - A recursive structural comparator producing path-qualified records
//! - Ordered and order-independent collection comparison
//! - Diagnostic reports written to an injectable sink
//! - Predicate factories for mocking frameworks

pub mod compare;
pub mod diagnostics;
pub mod errors;
pub mod inspect;
pub mod logging_facility;
pub mod matcher;
pub mod path;
pub mod policy;

// Re-export commonly used types
pub use compare::{
    compare, properties_equal, Comparer, ComparisonResult, EquivalenceCheck, InequalityReason,
    InequalityRecord,
};
pub use diagnostics::{DiagnosticSink, MemorySink, NullSink, StdoutSink, TracingSink};
pub use errors::{ExError, ExErrorKind, LikenessError, Result};
pub use inspect::{Inspect, Node, Strategy};
pub use path::PropertyPath;
pub use policy::{ComparisonMode, ComparisonPolicy};
