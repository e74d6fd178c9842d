//! Structural and collection comparison.
//!
//! ## Entry points
//!
//! ```
//! use likeness_core::compare::Comparer;
//! use likeness_core::diagnostics::NullSink;
//!
//! let comparer = Comparer::new().with_sink(NullSink);
//! let one = vec![1, 2, 3];
//! let two = vec![3, 2, 1];
//! assert!(!comparer.collections_equal(Some(&one[..]), Some(&two[..])));
//! assert!(comparer.collections_equivalent(Some(&one[..]), Some(&two[..])));
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: the engine keeps no state between calls; every call
//!   builds a fresh [`ComparisonResult`].
//! - **Bounded recursion**: properties nested deeper than
//!   [`MAX_RECURSION_DEPTH`] are compared with their own equality.
//! - **Side-channel diagnostics**: reports go to the comparer's sink and
//!   never change an outcome.

pub mod collection;
pub mod comparer;
pub mod engine;
pub mod model;
pub mod report;

pub use collection::{CollectionMismatch, EquivalenceCheck};
pub use comparer::{compare, properties_equal, Comparer};
pub use engine::{compare_nodes, MAX_RECURSION_DEPTH};
pub use model::{ComparisonResult, InequalityReason, InequalityRecord};
