//! The comparator entry points.
//!
//! A [`Comparer`] owns its diagnostic sink, so concurrently running tests
//! can each send failure reports to their own destination. Every entry
//! point compiles the policy once, runs the pure engine, and on failure
//! writes a report to the sink. Reports never affect the returned value.

use crate::compare::collection::{
    check_equivalent, check_ordered, CollectionMismatch, EquivalenceCheck,
};
use crate::compare::engine::{compare_nodes, compare_nodes_within};
use crate::compare::model::{ComparisonResult, InequalityReason, InequalityRecord};
use crate::compare::report::{collection_report, structural_report, write_all};
use crate::diagnostics::render::{describe_debug, describe_items, snapshot};
use crate::diagnostics::sink::{DiagnosticSink, SharedSink, StdoutSink};
use crate::inspect::Inspect;
use crate::path::PropertyPath;
use crate::policy::ComparisonPolicy;
use crate::{log_compare_end, log_op_end, log_op_start};
use likeness_core_types::schema::{OP_COMPARE, OP_COMPARE_EQUIVALENT, OP_COMPARE_ORDERED};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Structural and collection comparator with an injected diagnostic sink.
///
/// # Example
///
/// ```
/// use likeness_core::compare::Comparer;
/// use likeness_core::diagnostics::MemorySink;
/// use likeness_core::inspect_record;
/// use likeness_core::policy::ComparisonPolicy;
///
/// #[derive(Debug)]
/// struct Item {
///     id: u32,
///     description: String,
/// }
///
/// inspect_record!(Item { id, description });
///
/// let sink = MemorySink::new();
/// let comparer = Comparer::new().with_sink(sink.clone());
///
/// let a = Item { id: 1, description: "a".to_string() };
/// let b = Item { id: 1, description: "b".to_string() };
///
/// assert!(!comparer.properties_equal(&a, &b, &ComparisonPolicy::new()));
/// assert!(sink.contains("description"));
///
/// let lenient = ComparisonPolicy::new().ignoring(["description"]);
/// assert!(comparer.properties_equal(&a, &b, &lenient));
/// ```
#[derive(Clone)]
pub struct Comparer {
    sink: SharedSink,
    equivalence: EquivalenceCheck,
}

impl Default for Comparer {
    fn default() -> Self {
        Self {
            sink: Arc::new(StdoutSink),
            equivalence: EquivalenceCheck::default(),
        }
    }
}

impl fmt::Debug for Comparer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparer")
            .field("equivalence", &self.equivalence)
            .finish_non_exhaustive()
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn sequence_text<T: Inspect>(items: Option<&[T]>) -> String {
    items.map_or_else(|| "null".to_string(), |items| describe_items(items))
}

fn debug_sequence_text<T: fmt::Debug>(items: Option<&[T]>) -> String {
    items.map_or_else(|| "null".to_string(), |items| describe_debug(items))
}

fn sequence_snapshot<T: Inspect>(items: Option<&[T]>) -> Value {
    items.map_or(Value::Null, |items| {
        Value::Array(items.iter().map(|item| snapshot(item.node())).collect())
    })
}

impl Comparer {
    /// Comparer writing diagnostics to standard output
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(self, sink: impl DiagnosticSink + 'static) -> Self {
        self.with_shared_sink(Arc::new(sink))
    }

    pub fn with_shared_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_equivalence(mut self, equivalence: EquivalenceCheck) -> Self {
        self.equivalence = equivalence;
        self
    }

    pub fn equivalence(&self) -> EquivalenceCheck {
        self.equivalence
    }

    /// Compare two values and report every mismatch found.
    pub fn compare<T: Inspect>(
        &self,
        expected: &T,
        actual: &T,
        policy: &ComparisonPolicy,
    ) -> ComparisonResult {
        let start = Instant::now();
        log_op_start!(OP_COMPARE);

        let compiled = policy.compile();
        let result = compare_nodes(expected.node(), actual.node(), &compiled);
        if !result.equal {
            write_all(
                &*self.sink,
                &structural_report(expected.node(), actual.node(), &result),
            );
        }

        log_compare_end!(OP_COMPARE, start, &result);
        result
    }

    pub fn properties_equal<T: Inspect>(
        &self,
        expected: &T,
        actual: &T,
        policy: &ComparisonPolicy,
    ) -> bool {
        self.compare(expected, actual, policy).equal
    }

    /// Panic unless the two values compare equal.
    ///
    /// # Panics
    ///
    /// Panics when the comparison finds a difference; the full report has
    /// already been written to the sink at that point.
    #[track_caller]
    pub fn assert_properties_equal<T: Inspect>(
        &self,
        expected: &T,
        actual: &T,
        policy: &ComparisonPolicy,
    ) {
        let result = self.compare(expected, actual, policy);
        if !result.equal {
            let paths = result.inequal_paths();
            if paths.is_empty() {
                panic!("expected and actual are unequal; see diagnostic output");
            }
            panic!(
                "expected and actual differ at [{}]; see diagnostic output",
                paths.join(", ")
            );
        }
    }

    fn finish_collection(
        &self,
        op: &'static str,
        start: Instant,
        outcome: Result<(), CollectionMismatch>,
        dumps: impl FnOnce() -> (String, String),
    ) -> bool {
        if let Err(mismatch) = &outcome {
            let (one, two) = dumps();
            write_all(&*self.sink, &collection_report(mismatch, None, one, two));
        }
        log_op_end!(op, duration_ms = elapsed_ms(start), equal = outcome.is_ok());
        outcome.is_ok()
    }

    /// Ordered equality using each item's own equality.
    pub fn collections_equal<T: Inspect>(&self, one: Option<&[T]>, two: Option<&[T]>) -> bool {
        let start = Instant::now();
        log_op_start!(OP_COMPARE_ORDERED);
        let outcome = check_ordered(one, two, |a, b| a.node().default_eq(&b.node()));
        self.finish_collection(OP_COMPARE_ORDERED, start, outcome, || {
            (sequence_text(one), sequence_text(two))
        })
    }

    /// Ordered equality with a caller-supplied item predicate.
    pub fn collections_equal_by<T, F>(
        &self,
        one: Option<&[T]>,
        two: Option<&[T]>,
        item_equal: F,
    ) -> bool
    where
        T: fmt::Debug,
        F: FnMut(&T, &T) -> bool,
    {
        let start = Instant::now();
        log_op_start!(OP_COMPARE_ORDERED);
        let outcome = check_ordered(one, two, item_equal);
        self.finish_collection(OP_COMPARE_ORDERED, start, outcome, || {
            (debug_sequence_text(one), debug_sequence_text(two))
        })
    }

    /// Ordered comparison of items by their properties.
    ///
    /// Records carry the item position: a difference in `Id` of the second
    /// items is reported at `[1].Id`. Comparison stops at the first
    /// differing position.
    pub fn compare_ordered_by_properties<T: Inspect>(
        &self,
        one: Option<&[T]>,
        two: Option<&[T]>,
        policy: &ComparisonPolicy,
    ) -> ComparisonResult {
        let start = Instant::now();
        log_op_start!(OP_COMPARE_ORDERED);

        let compiled = policy.compile();
        let mut result = ComparisonResult::matching();
        let mut position = 0;
        let outcome = check_ordered(one, two, |a, b| {
            let item = compare_nodes_within(
                a.node(),
                b.node(),
                &compiled,
                PropertyPath::root().index(position),
            );
            position += 1;
            result.ignored_paths.extend(item.ignored_paths);
            result.inequalities.extend(item.inequalities);
            item.equal
        });

        if let Err(mismatch) = &outcome {
            result.equal = false;
            if let CollectionMismatch::LengthMismatch { len_one, len_two } = mismatch {
                result.inequalities.push(InequalityRecord {
                    path: String::new(),
                    expected_value: sequence_snapshot(one),
                    actual_value: sequence_snapshot(two),
                    reason: InequalityReason::CountMismatch {
                        expected: *len_one,
                        actual: *len_two,
                    },
                });
            }
            write_all(
                &*self.sink,
                &collection_report(
                    mismatch,
                    Some(&result),
                    sequence_text(one),
                    sequence_text(two),
                ),
            );
        }

        log_compare_end!(OP_COMPARE_ORDERED, start, &result);
        result
    }

    pub fn collections_equal_by_properties<T: Inspect>(
        &self,
        one: Option<&[T]>,
        two: Option<&[T]>,
        policy: &ComparisonPolicy,
    ) -> bool {
        self.compare_ordered_by_properties(one, two, policy).equal
    }

    /// Order-independent equality using each item's own equality.
    pub fn collections_equivalent<T: Inspect>(&self, one: Option<&[T]>, two: Option<&[T]>) -> bool {
        let start = Instant::now();
        log_op_start!(OP_COMPARE_EQUIVALENT);
        let outcome = check_equivalent(one, two, self.equivalence, |a, b| {
            a.node().default_eq(&b.node())
        });
        self.finish_collection(OP_COMPARE_EQUIVALENT, start, outcome, || {
            (sequence_text(one), sequence_text(two))
        })
    }

    /// Order-independent equality with a caller-supplied item predicate.
    pub fn collections_equivalent_by<T, F>(
        &self,
        one: Option<&[T]>,
        two: Option<&[T]>,
        item_equal: F,
    ) -> bool
    where
        T: fmt::Debug,
        F: FnMut(&T, &T) -> bool,
    {
        let start = Instant::now();
        log_op_start!(OP_COMPARE_EQUIVALENT);
        let outcome = check_equivalent(one, two, self.equivalence, item_equal);
        self.finish_collection(OP_COMPARE_EQUIVALENT, start, outcome, || {
            (debug_sequence_text(one), debug_sequence_text(two))
        })
    }

    /// Order-independent equality of items compared by their properties.
    /// Individual item comparisons are silent.
    pub fn collections_equivalent_by_properties<T: Inspect>(
        &self,
        one: Option<&[T]>,
        two: Option<&[T]>,
        policy: &ComparisonPolicy,
    ) -> bool {
        let start = Instant::now();
        log_op_start!(OP_COMPARE_EQUIVALENT);
        let compiled = policy.compile();
        let outcome = check_equivalent(one, two, self.equivalence, |a, b| {
            compare_nodes(a.node(), b.node(), &compiled).equal
        });
        self.finish_collection(OP_COMPARE_EQUIVALENT, start, outcome, || {
            (sequence_text(one), sequence_text(two))
        })
    }
}

/// Compare two values with a default comparer (diagnostics to stdout).
pub fn compare<T: Inspect>(
    expected: &T,
    actual: &T,
    policy: &ComparisonPolicy,
) -> ComparisonResult {
    Comparer::default().compare(expected, actual, policy)
}

/// Boolean form of [`compare`].
pub fn properties_equal<T: Inspect>(expected: &T, actual: &T, policy: &ComparisonPolicy) -> bool {
    compare(expected, actual, policy).equal
}
