//! Structural comparison engine.
//!
//! Walks two values in lock step, choosing a comparison strategy per
//! property, and collects path-qualified inequality records plus the
//! paths the policy excluded. The walk itself is pure: diagnostics and
//! logging belong to the [`Comparer`](crate::compare::Comparer).

use crate::compare::model::{ComparisonResult, InequalityReason, InequalityRecord};
use crate::diagnostics::render::snapshot;
use crate::inspect::{Node, Strategy};
use crate::path::PropertyPath;
use crate::policy::CompiledPolicy;

/// Deepest recursion level at which sub-properties are still unpacked.
/// Beyond it values are compared with their own (default) equality.
pub const MAX_RECURSION_DEPTH: usize = 15;

/// Outcome of comparing one pair of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Equal,
    /// Unequal, with records already pushed
    Detailed,
    /// Unequal, nothing recorded yet; the caller decides where to record it
    Shallow(InequalityReason),
}

/// Compare two resolved values from the root.
pub fn compare_nodes(
    expected: Node<'_>,
    actual: Node<'_>,
    policy: &CompiledPolicy,
) -> ComparisonResult {
    Walk::new(policy, PropertyPath::root()).run(expected, actual, false)
}

/// Compare two values that sit at `display_prefix` inside a larger
/// structure (e.g. `[3]` for the fourth item of a collection).
///
/// Policy paths stay relative to the compared values; only the reported
/// paths carry the prefix. A shallow mismatch is recorded at the prefix
/// itself rather than left without detail.
pub fn compare_nodes_within(
    expected: Node<'_>,
    actual: Node<'_>,
    policy: &CompiledPolicy,
    display_prefix: PropertyPath,
) -> ComparisonResult {
    Walk::new(policy, display_prefix).run(expected, actual, true)
}

struct Walk<'p> {
    policy: &'p CompiledPolicy,
    display_prefix: PropertyPath,
    inequalities: Vec<InequalityRecord>,
    ignored: Vec<String>,
}

impl<'p> Walk<'p> {
    fn new(policy: &'p CompiledPolicy, display_prefix: PropertyPath) -> Self {
        Self {
            policy,
            display_prefix,
            inequalities: Vec::new(),
            ignored: Vec::new(),
        }
    }

    fn run(mut self, expected: Node<'_>, actual: Node<'_>, detail_root: bool) -> ComparisonResult {
        let root = PropertyPath::root();
        let mut verdict = self.compare_value(expected, actual, 1, &root, false);

        if let Verdict::Shallow(reason) = verdict {
            if detail_root {
                self.record(&root, expected, actual, reason);
                verdict = Verdict::Detailed;
            }
        }

        ComparisonResult {
            equal: verdict == Verdict::Equal,
            inequalities: self.inequalities,
            ignored_paths: self.ignored,
        }
    }

    fn display(&self, path: &PropertyPath) -> String {
        if self.display_prefix.is_root() {
            path.to_string()
        } else {
            self.display_prefix.join(path).to_string()
        }
    }

    fn record(
        &mut self,
        path: &PropertyPath,
        expected: Node<'_>,
        actual: Node<'_>,
        reason: InequalityReason,
    ) {
        self.inequalities.push(InequalityRecord {
            path: self.display(path),
            expected_value: snapshot(expected),
            actual_value: snapshot(actual),
            reason,
        });
    }

    fn verdict_since(&self, recorded_before: usize) -> Verdict {
        if self.inequalities.len() > recorded_before {
            Verdict::Detailed
        } else {
            Verdict::Equal
        }
    }

    /// Record a whole-value mismatch when `equal` is false.
    fn leaf(
        &mut self,
        equal: bool,
        path: &PropertyPath,
        expected: Node<'_>,
        actual: Node<'_>,
        reason: InequalityReason,
    ) -> Verdict {
        if equal {
            Verdict::Equal
        } else {
            self.record(path, expected, actual, reason);
            Verdict::Detailed
        }
    }

    /// Compare two values as a unit: the root, a recursed-into property, or
    /// (with `item_mode`) two items at the same position of parallel
    /// sequences.
    fn compare_value(
        &mut self,
        expected: Node<'_>,
        actual: Node<'_>,
        depth: usize,
        path: &PropertyPath,
        item_mode: bool,
    ) -> Verdict {
        match (expected.is_null(), actual.is_null()) {
            (true, true) => return Verdict::Equal,
            (true, false) | (false, true) => {
                return Verdict::Shallow(InequalityReason::NullMismatch)
            }
            (false, false) => {}
        }

        if !expected.same_type(&actual) {
            return Verdict::Shallow(InequalityReason::TypeMismatch);
        }

        let strategy = expected.strategy();
        if strategy == Strategy::Value {
            return if expected.default_eq(&actual) {
                Verdict::Equal
            } else {
                Verdict::Shallow(InequalityReason::ValueTypeEqualityFailed)
            };
        }

        if item_mode {
            if self.policy.is_reference_only(path) {
                let same = expected.same_identity(&actual);
                return self.leaf(
                    same,
                    path,
                    expected,
                    actual,
                    InequalityReason::ReferenceEqualityFailed,
                );
            }
            match strategy {
                Strategy::Ordered => {
                    let equal = expected.ordered_eq(&actual);
                    return self.leaf(
                        equal,
                        path,
                        expected,
                        actual,
                        InequalityReason::OrderedComparisonNonZero,
                    );
                }
                Strategy::Custom => {
                    let equal = expected.default_eq(&actual);
                    return self.leaf(
                        equal,
                        path,
                        expected,
                        actual,
                        InequalityReason::CustomEqualityFailed,
                    );
                }
                Strategy::Value | Strategy::Structural => {}
            }
        }

        if let (Some(expected_items), Some(actual_items)) = (expected.elements(), actual.elements())
        {
            if depth > MAX_RECURSION_DEPTH {
                return self.default_verdict(expected, actual);
            }
            let before = self.inequalities.len();
            self.compare_sequences(
                &expected_items,
                &actual_items,
                depth,
                path,
                expected,
                actual,
            );
            return self.verdict_since(before);
        }

        let expected_fields = expected.fields();
        if expected_fields.is_empty() {
            return self.default_verdict(expected, actual);
        }
        let actual_fields = actual.fields();

        let before = self.inequalities.len();
        for (expected_field, actual_field) in expected_fields.iter().zip(&actual_fields) {
            let child = path.child(expected_field.name);
            if self.policy.is_ignored(&child) {
                self.ignored.push(self.display(&child));
                continue;
            }
            self.compare_property(
                expected_field.value.node(),
                actual_field.value.node(),
                depth,
                &child,
            );
        }
        self.verdict_since(before)
    }

    fn default_verdict(&self, expected: Node<'_>, actual: Node<'_>) -> Verdict {
        if expected.default_eq(&actual) {
            Verdict::Equal
        } else {
            Verdict::Shallow(InequalityReason::DefaultEqualityFailed)
        }
    }

    /// Compare one property pair found at `depth`, recording any mismatch.
    fn compare_property(
        &mut self,
        expected: Node<'_>,
        actual: Node<'_>,
        depth: usize,
        path: &PropertyPath,
    ) {
        if expected.is_null() && actual.is_null() {
            return;
        }

        let failure = if self.policy.is_reference_only(path) {
            (!expected.same_identity(&actual)).then_some(InequalityReason::ReferenceEqualityFailed)
        } else if expected.is_null() || actual.is_null() {
            Some(InequalityReason::NullMismatch)
        } else if !expected.same_type(&actual) {
            Some(InequalityReason::TypeMismatch)
        } else {
            match expected.strategy() {
                Strategy::Value => (!expected.default_eq(&actual))
                    .then_some(InequalityReason::ValueTypeEqualityFailed),
                Strategy::Ordered => (!expected.ordered_eq(&actual))
                    .then_some(InequalityReason::OrderedComparisonNonZero),
                Strategy::Custom => (!expected.default_eq(&actual))
                    .then_some(InequalityReason::CustomEqualityFailed),
                Strategy::Structural => self.compare_structural(expected, actual, depth, path),
            }
        };

        if let Some(reason) = failure {
            self.record(path, expected, actual, reason);
        }
    }

    /// A property without a direct strategy: recurse when allowed, else
    /// fall back to the type's own equality. Returns a reason only for
    /// mismatches that still need a record at `path`.
    fn compare_structural(
        &mut self,
        expected: Node<'_>,
        actual: Node<'_>,
        depth: usize,
        path: &PropertyPath,
    ) -> Option<InequalityReason> {
        if !self.policy.recurse_sub_properties || depth > MAX_RECURSION_DEPTH {
            return (!expected.default_eq(&actual))
                .then_some(InequalityReason::DefaultEqualityFailed);
        }

        if let (Some(expected_items), Some(actual_items)) = (expected.elements(), actual.elements())
        {
            self.compare_sequences(
                &expected_items,
                &actual_items,
                depth,
                path,
                expected,
                actual,
            );
            return None;
        }

        match self.compare_value(expected, actual, depth + 1, path, false) {
            Verdict::Shallow(reason) => Some(reason),
            Verdict::Equal | Verdict::Detailed => None,
        }
    }

    /// Positional comparison of parallel sequences found at `path`.
    fn compare_sequences(
        &mut self,
        expected_items: &[Node<'_>],
        actual_items: &[Node<'_>],
        depth: usize,
        path: &PropertyPath,
        expected: Node<'_>,
        actual: Node<'_>,
    ) {
        if expected_items.len() != actual_items.len() {
            self.record(
                path,
                expected,
                actual,
                InequalityReason::CountMismatch {
                    expected: expected_items.len(),
                    actual: actual_items.len(),
                },
            );
            return;
        }

        for (index, (expected_item, actual_item)) in
            expected_items.iter().zip(actual_items).enumerate()
        {
            let item_path = path.index(index);
            if let Verdict::Shallow(reason) =
                self.compare_value(*expected_item, *actual_item, depth + 1, &item_path, true)
            {
                self.record(&item_path, *expected_item, *actual_item, reason);
            }
        }
    }
}
