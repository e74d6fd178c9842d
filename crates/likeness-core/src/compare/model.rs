//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Records keep traversal order: root first, properties in declaration
//! order, collection items in positional order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a leaf-level mismatch was reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InequalityReason {
    /// Path is reference-only and the values are distinct instances
    ReferenceEqualityFailed,
    /// Exactly one side is null
    NullMismatch,
    ValueTypeEqualityFailed,
    OrderedComparisonNonZero,
    CustomEqualityFailed,
    /// No direct strategy and no recursion (or depth ceiling reached)
    DefaultEqualityFailed,
    /// Parallel sequences of different length
    CountMismatch { expected: usize, actual: usize },
    /// Runtime types disagree
    TypeMismatch,
}

impl fmt::Display for InequalityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InequalityReason::ReferenceEqualityFailed => f.write_str("reference equality failed"),
            InequalityReason::NullMismatch => f.write_str("null mismatch"),
            InequalityReason::ValueTypeEqualityFailed => f.write_str("value-type equality failed"),
            InequalityReason::OrderedComparisonNonZero => {
                f.write_str("ordered comparison non-zero")
            }
            InequalityReason::CustomEqualityFailed => f.write_str("custom equality failed"),
            InequalityReason::DefaultEqualityFailed => f.write_str("default equality failed"),
            InequalityReason::CountMismatch { expected, actual } => write!(
                f,
                "count mismatch - expected count: {} actual count: {}",
                expected, actual
            ),
            InequalityReason::TypeMismatch => f.write_str("type mismatch"),
        }
    }
}

/// One leaf-level mismatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InequalityRecord {
    /// Path with concrete indices, e.g. `Lines[1].Sku`; empty for the root
    pub path: String,
    /// JSON rendering of the expected value (`null` when absent)
    pub expected_value: serde_json::Value,
    /// JSON rendering of the actual value (`null` when absent)
    pub actual_value: serde_json::Value,
    pub reason: InequalityReason,
}

/// Outcome of one structural comparison.
///
/// `equal` is true exactly when `inequalities` is empty, except for a
/// top-level null mismatch, type mismatch or value-type inequality, which
/// report `equal == false` without detail.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    pub equal: bool,
    pub inequalities: Vec<InequalityRecord>,
    /// Paths excluded by the policy, reported even when `equal` is true
    pub ignored_paths: Vec<String>,
}

impl ComparisonResult {
    /// A successful comparison with nothing ignored
    pub fn matching() -> Self {
        Self {
            equal: true,
            ..Self::default()
        }
    }

    /// Record at `path`, if any
    pub fn inequality_at(&self, path: &str) -> Option<&InequalityRecord> {
        self.inequalities.iter().find(|r| r.path == path)
    }

    /// Mismatched paths in traversal order
    pub fn inequal_paths(&self) -> Vec<&str> {
        self.inequalities.iter().map(|r| r.path.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reason_display() {
        assert_eq!(InequalityReason::NullMismatch.to_string(), "null mismatch");
        assert_eq!(
            InequalityReason::CountMismatch {
                expected: 2,
                actual: 3
            }
            .to_string(),
            "count mismatch - expected count: 2 actual count: 3"
        );
    }

    #[test]
    fn test_result_serializes_with_tagged_reason() {
        let result = ComparisonResult {
            equal: false,
            inequalities: vec![InequalityRecord {
                path: "[1].Id".to_string(),
                expected_value: json!(2),
                actual_value: json!(3),
                reason: InequalityReason::ValueTypeEqualityFailed,
            }],
            ignored_paths: vec![],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value["inequalities"][0]["reason"],
            json!({"kind": "value_type_equality_failed"})
        );
        let back: ComparisonResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.inequal_paths(), vec!["[1].Id"]);
    }
}
