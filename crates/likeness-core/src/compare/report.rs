//! Human-readable failure reports.
//!
//! Reports are built as lines so that every sink receives the same text
//! regardless of how it writes it out. They describe a result; they never
//! change it.

use crate::compare::collection::CollectionMismatch;
use crate::compare::model::ComparisonResult;
use crate::diagnostics::render::describe;
use crate::diagnostics::sink::{emit, DiagnosticSink};
use crate::inspect::Node;

const RULE: &str = "---------------";

fn path_label(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

/// Per-record listing plus ignored properties, without the value dumps.
pub fn inequality_lines(result: &ComparisonResult) -> Vec<String> {
    let mut lines = Vec::new();

    if result.inequalities.is_empty() {
        lines.push("Items unequal.".to_string());
    } else {
        lines.push("Items unequal due to having unequal properties.".to_string());
        lines.push("Unequal properties:".to_string());
        lines.push(String::new());
        for record in &result.inequalities {
            lines.push(path_label(&record.path).to_string());
            lines.push(RULE.to_string());
            lines.push("Reason: ".to_string());
            lines.push(record.reason.to_string());
            lines.push("Expected Value: ".to_string());
            lines.push(record.expected_value.to_string());
            lines.push("Actual Value:".to_string());
            lines.push(record.actual_value.to_string());
            lines.push(String::new());
        }
    }

    if !result.ignored_paths.is_empty() {
        lines.push(String::new());
        lines.push("Ignored properties:".to_string());
        lines.extend(result.ignored_paths.iter().cloned());
    }

    lines
}

/// Lines for a labelled value dump (`"Expected: "` followed by the value).
pub fn dump_lines(label: &str, text: String) -> [String; 2] {
    [format!("{}: ", label), text]
}

/// Full report for a failed single-value comparison.
pub fn structural_report(
    expected: Node<'_>,
    actual: Node<'_>,
    result: &ComparisonResult,
) -> Vec<String> {
    let mut lines = inequality_lines(result);
    lines.push(String::new());
    lines.extend(dump_lines("Expected", describe(expected)));
    lines.extend(dump_lines("Actual", describe(actual)));
    lines
}

/// Full report for a failed collection comparison. `detail` carries the
/// per-item structural findings when there are any.
pub fn collection_report(
    mismatch: &CollectionMismatch,
    detail: Option<&ComparisonResult>,
    one: String,
    two: String,
) -> Vec<String> {
    let mut lines = vec![format!("CollectionComparer - {}", mismatch)];
    if let Some(result) = detail.filter(|r| !r.inequalities.is_empty()) {
        lines.extend(inequality_lines(result));
    }
    lines.extend(dump_lines("Collection one", one));
    lines.extend(dump_lines("Collection two", two));
    lines
}

/// Write every line to the sink.
pub fn write_all(sink: &dyn DiagnosticSink, lines: &[String]) {
    for line in lines {
        emit(sink, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::model::{InequalityReason, InequalityRecord};
    use crate::inspect::Inspect;
    use serde_json::{json, Value};

    fn failed() -> ComparisonResult {
        ComparisonResult {
            equal: false,
            inequalities: vec![InequalityRecord {
                path: "Lines[0].Sku".to_string(),
                expected_value: json!("A"),
                actual_value: Value::Null,
                reason: InequalityReason::NullMismatch,
            }],
            ignored_paths: vec!["Audit".to_string()],
        }
    }

    #[test]
    fn test_inequality_lines_layout() {
        let lines = inequality_lines(&failed());
        assert_eq!(lines[0], "Items unequal due to having unequal properties.");
        assert_eq!(lines[3], "Lines[0].Sku");
        assert_eq!(lines[4], RULE);
        assert_eq!(lines[6], "null mismatch");
        assert_eq!(lines[8], "\"A\"");
        assert_eq!(lines[10], "null");
        assert!(lines.ends_with(&["Ignored properties:".to_string(), "Audit".to_string()]));
    }

    #[test]
    fn test_structural_report_dumps_both_values() {
        let lines = structural_report(1u8.node(), 2u8.node(), &failed());
        let tail: Vec<_> = lines.iter().rev().take(4).rev().cloned().collect();
        assert_eq!(tail, vec!["Expected: ", "1", "Actual: ", "2"]);
    }

    #[test]
    fn test_collection_report_header() {
        let lines = collection_report(
            &CollectionMismatch::OneNull,
            None,
            "[1]".to_string(),
            "null".to_string(),
        );
        assert_eq!(
            lines,
            vec![
                "CollectionComparer - Collections unequal due to one item being null.",
                "Collection one: ",
                "[1]",
                "Collection two: ",
                "null",
            ]
        );
    }
}
