//! Rendering values for diagnostics
//!
//! Three tiers, each tried only when the previous one fails:
//! 1. compact JSON built from the value's `Inspect` description
//! 2. pretty `Debug` output
//! 3. the fixed text [`UNRENDERABLE`]
//!
//! None of these functions can fail or panic.

use crate::errors::{LikenessError, Result};
use crate::inspect::{Inspect, Node};
use serde_json::{Map, Value};
use std::fmt::{self, Write as _};
use std::panic::{self, AssertUnwindSafe};

/// Placeholder used when no rendering succeeds
pub const UNRENDERABLE: &str = "Unable to determine object values.";

/// Deepest nesting the JSON renderer descends into
pub const MAX_RENDER_DEPTH: usize = 32;

/// Build a JSON view of a node.
///
/// # Errors
///
/// Fails when nesting exceeds [`MAX_RENDER_DEPTH`], a scalar refuses to
/// serialize, or a leaf's `Debug` implementation reports an error.
pub fn to_json(node: Node<'_>) -> Result<Value> {
    to_json_at(node, 1)
}

fn to_json_at(node: Node<'_>, depth: usize) -> Result<Value> {
    if depth > MAX_RENDER_DEPTH {
        return Err(LikenessError::RenderDepthExceeded {
            max_depth: MAX_RENDER_DEPTH,
        });
    }

    match node {
        Node::Null => Ok(Value::Null),
        Node::Pair { key, value } => {
            let mut map = Map::new();
            map.insert("Key".to_string(), to_json_at(key.node(), depth + 1)?);
            map.insert("Value".to_string(), to_json_at(value.node(), depth + 1)?);
            Ok(Value::Object(map))
        }
        Node::Value(value) => {
            if let Some(scalar) = value.scalar_json() {
                return Ok(scalar?);
            }
            if let Some(elements) = value.elements() {
                let items = elements
                    .into_iter()
                    .map(|element| to_json_at(element, depth + 1))
                    .collect::<Result<Vec<_>>>()?;
                return Ok(Value::Array(items));
            }
            let fields = value.fields();
            if fields.is_empty() {
                return debug_text(value, false).map(Value::String);
            }
            let mut map = Map::new();
            for field in fields {
                map.insert(
                    field.name.to_string(),
                    to_json_at(field.value.node(), depth + 1)?,
                );
            }
            Ok(Value::Object(map))
        }
    }
}

fn debug_text<T: fmt::Debug + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let mut out = String::new();
    let written = if pretty {
        write!(out, "{:#?}", value)
    } else {
        write!(out, "{:?}", value)
    };
    written.map_err(|_| LikenessError::Serialization {
        message: "Debug implementation reported an error".to_string(),
    })?;
    Ok(out)
}

fn guarded(render: impl FnOnce() -> String) -> String {
    panic::catch_unwind(AssertUnwindSafe(render)).unwrap_or_else(|_| UNRENDERABLE.to_string())
}

/// Human-readable text for a node: compact JSON, else pretty Debug, else
/// the placeholder.
pub fn describe(node: Node<'_>) -> String {
    guarded(|| {
        if let Ok(text) = to_json(node).and_then(|json| Ok(serde_json::to_string(&json)?)) {
            return text;
        }
        let fallback = match node {
            Node::Null => Ok("null".to_string()),
            Node::Value(value) => debug_text(value, true),
            Node::Pair { key, value } => debug_text(&(key, value), true),
        };
        fallback.unwrap_or_else(|_| UNRENDERABLE.to_string())
    })
}

/// Text for a whole sequence of inspectable items.
pub fn describe_items<T: Inspect>(items: &[T]) -> String {
    guarded(|| {
        let json = items
            .iter()
            .map(|item| to_json(item.node()))
            .collect::<Result<Vec<_>>>()
            .and_then(|values| Ok(serde_json::to_string(&Value::Array(values))?));
        match json {
            Ok(text) => text,
            Err(_) => debug_text(items, true).unwrap_or_else(|_| UNRENDERABLE.to_string()),
        }
    })
}

/// Text for any `Debug` value: compact, else pretty, else the placeholder.
pub fn describe_debug<T: fmt::Debug + ?Sized>(value: &T) -> String {
    guarded(|| {
        debug_text(value, false)
            .or_else(|_| debug_text(value, true))
            .unwrap_or_else(|_| UNRENDERABLE.to_string())
    })
}

/// JSON value stored in an inequality record. Falls back to a JSON string
/// holding the textual rendering.
pub fn snapshot(node: Node<'_>) -> Value {
    match panic::catch_unwind(AssertUnwindSafe(|| to_json(node))) {
        Ok(Ok(json)) => json,
        _ => Value::String(describe(node)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect_record;
    use serde_json::json;

    #[derive(Debug)]
    struct Line {
        sku: String,
        qty: u32,
        note: Option<String>,
    }

    inspect_record!(Line { sku, qty, note });

    #[derive(Debug)]
    struct Chain {
        next: Option<Box<Chain>>,
    }

    inspect_record!(Chain { next });

    struct Broken;

    impl fmt::Debug for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    impl Inspect for Broken {}

    fn chain(len: usize) -> Chain {
        let mut head = Chain { next: None };
        for _ in 1..len {
            head = Chain {
                next: Some(Box::new(head)),
            };
        }
        head
    }

    #[test]
    fn test_record_renders_as_object() {
        let line = Line {
            sku: "A-1".to_string(),
            qty: 2,
            note: None,
        };
        assert_eq!(
            to_json(line.node()).unwrap(),
            json!({"sku": "A-1", "qty": 2, "note": null})
        );
    }

    #[test]
    fn test_sequence_and_pair_render() {
        let items = vec![(1u32, "a".to_string())];
        assert_eq!(
            to_json(items.node()).unwrap(),
            json!([{"Key": 1, "Value": "a"}])
        );
        assert_eq!(describe_items(&[1u8, 2, 3]), "[1,2,3]");
    }

    #[test]
    fn test_too_deep_falls_back_to_debug() {
        let deep = chain(MAX_RENDER_DEPTH + 5);
        assert!(to_json(deep.node()).is_err());
        let text = describe(deep.node());
        assert!(text.starts_with("Chain"));
    }

    #[test]
    fn test_total_failure_yields_placeholder() {
        assert_eq!(describe(Broken.node()), UNRENDERABLE);
        assert_eq!(describe_debug(&Broken), UNRENDERABLE);
        assert_eq!(snapshot(Broken.node()), json!(UNRENDERABLE));
    }

    #[test]
    fn test_null_renders_as_null() {
        assert_eq!(describe(Node::Null), "null");
        assert_eq!(snapshot(Node::Null), Value::Null);
    }
}
