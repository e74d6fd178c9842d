//! Introspection capability for comparable values
//!
//! Rust has no runtime reflection, so every type that takes part in a
//! structural comparison describes itself through [`Inspect`]:
//! - how it is compared when it is a leaf ([`Strategy`])
//! - its properties in declaration order ([`Inspect::fields`])
//! - its elements when it is a sequence ([`Inspect::elements`])
//!
//! Implementations for user types are normally generated with the
//! declarative macros in [`macros`](crate::inspect_record).
//!
//! # Example
//!
//! ```
//! use likeness_core::inspect_record;
//!
//! #[derive(Debug)]
//! struct Line {
//!     sku: String,
//!     qty: u32,
//! }
//!
//! inspect_record!(Line { sku, qty });
//! ```

pub mod macros;
pub mod std_impls;

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;

/// How a value is compared when no further traversal applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Fixed-size scalar compared by direct value equality, never traversed
    Value,
    /// Totally ordered; equal iff the comparison yields `Equal`
    Ordered,
    /// Provides its own equality
    Custom,
    /// No direct strategy; compared by identity unless recursion is enabled
    Structural,
}

/// Upcasting helpers, implemented for every sized [`Inspect`] type.
pub trait AsInspect {
    fn as_inspect(&self) -> &dyn Inspect;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Inspect> AsInspect for T {
    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Capability implemented by every comparable type.
pub trait Inspect: AsInspect + fmt::Debug + Any {
    fn strategy(&self) -> Strategy {
        Strategy::Structural
    }

    /// The resolved view of this value. Wrappers (`Option`, `Box`, `Rc`,
    /// `Arc`) forward to their content; `None` resolves to [`Node::Null`].
    fn node(&self) -> Node<'_> {
        Node::Value(self.as_inspect())
    }

    /// Properties in declaration order
    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    /// Elements in positional order, for sequences
    fn elements(&self) -> Option<Vec<Node<'_>>> {
        None
    }

    /// Equality against another value of the same runtime type.
    ///
    /// Defaults to identity: types without an equality of their own are
    /// only equal to themselves.
    fn eq_dyn(&self, other: &dyn Inspect) -> bool {
        same_address(self.as_inspect(), other)
    }

    fn cmp_dyn(&self, _other: &dyn Inspect) -> Option<Ordering> {
        None
    }

    /// JSON form of a scalar leaf; `None` means "render structurally or via Debug"
    fn scalar_json(&self) -> Option<serde_json::Result<serde_json::Value>> {
        None
    }
}

/// Equality through `PartialEq` after a downcast; false on type mismatch.
pub fn eq_by_value<T: Inspect + PartialEq>(this: &T, other: &dyn Inspect) -> bool {
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

/// Ordering through `Ord` after a downcast; `None` on type mismatch.
pub fn cmp_by_ord<T: Inspect + Ord>(this: &T, other: &dyn Inspect) -> Option<Ordering> {
    other
        .as_any()
        .downcast_ref::<T>()
        .map(|other| this.cmp(other))
}

/// True if both references point at the same storage.
pub fn same_address(a: &dyn Inspect, b: &dyn Inspect) -> bool {
    std::ptr::eq(
        a as *const dyn Inspect as *const (),
        b as *const dyn Inspect as *const (),
    )
}

fn type_of(value: &dyn Inspect) -> TypeId {
    Any::type_id(value.as_any())
}

/// A named property of a record.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a dyn Inspect,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn Inspect) -> Self {
        Self { name, value }
    }
}

/// A resolved value as seen by the comparator.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Null,
    Value(&'a dyn Inspect),
    /// The key/value pair shape: always unpacked into `Key` and `Value`,
    /// never compared as a scalar or through custom equality.
    Pair {
        key: &'a dyn Inspect,
        value: &'a dyn Inspect,
    },
}

impl<'a> Node<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Runtime type agreement; `Null` never agrees with anything.
    pub fn same_type(&self, other: &Node<'_>) -> bool {
        match (self, other) {
            (Node::Value(a), Node::Value(b)) => type_of(*a) == type_of(*b),
            (Node::Pair { key: ak, value: av }, Node::Pair { key: bk, value: bv }) => {
                type_of(*ak) == type_of(*bk) && type_of(*av) == type_of(*bv)
            }
            _ => false,
        }
    }

    /// Identity comparison ("same underlying storage")
    pub fn same_identity(&self, other: &Node<'_>) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Value(a), Node::Value(b)) => same_address(*a, *b),
            (Node::Pair { key: ak, value: av }, Node::Pair { key: bk, value: bv }) => {
                same_address(*ak, *bk) && same_address(*av, *bv)
            }
            _ => false,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Node::Value(v) => v.strategy(),
            Node::Null | Node::Pair { .. } => Strategy::Structural,
        }
    }

    pub fn fields(&self) -> Vec<Field<'a>> {
        match self {
            Node::Value(v) => v.fields(),
            Node::Pair { key, value } => vec![Field::new("Key", *key), Field::new("Value", *value)],
            Node::Null => Vec::new(),
        }
    }

    pub fn elements(&self) -> Option<Vec<Node<'a>>> {
        match self {
            Node::Value(v) => v.elements(),
            Node::Null | Node::Pair { .. } => None,
        }
    }

    /// The type's own equality (identity for structural types). A pair is
    /// equal when both halves are.
    pub fn default_eq(&self, other: &Node<'_>) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Value(a), Node::Value(b)) => a.eq_dyn(*b),
            (Node::Pair { key: ak, value: av }, Node::Pair { key: bk, value: bv }) => {
                ak.node().default_eq(&bk.node()) && av.node().default_eq(&bv.node())
            }
            _ => false,
        }
    }

    /// Zero-comparison for ordered types; false when no ordering exists.
    pub fn ordered_eq(&self, other: &Node<'_>) -> bool {
        match (self, other) {
            (Node::Value(a), Node::Value(b)) => a.cmp_dyn(*b) == Some(Ordering::Equal),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[derive(Debug)]
    struct Opaque {
        _id: u32,
    }

    impl Inspect for Opaque {}

    #[test]
    fn test_default_equality_is_identity() {
        let a = Opaque { _id: 1 };
        let b = Opaque { _id: 1 };
        assert!(a.node().default_eq(&a.node()));
        assert!(!a.node().default_eq(&b.node()));
    }

    #[test]
    fn test_option_resolves_to_null_or_content() {
        let none: Option<u32> = None;
        let some = Some(5u32);
        assert!(none.node().is_null());
        assert!(some.node().same_type(&5u32.node()));
    }

    #[test]
    fn test_shared_rc_is_same_identity() {
        let shared = Rc::new(Opaque { _id: 1 });
        let other = Rc::clone(&shared);
        let distinct = Rc::new(Opaque { _id: 1 });
        assert!(shared.node().same_identity(&other.node()));
        assert!(!shared.node().same_identity(&distinct.node()));
    }

    #[test]
    fn test_pair_never_takes_value_strategy() {
        let pair = (1u32, "a".to_string());
        assert_eq!(pair.node().strategy(), Strategy::Structural);
        let names: Vec<_> = pair.node().fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["Key", "Value"]);
    }

    #[test]
    fn test_type_mismatch_detected() {
        assert!(!1u32.node().same_type(&1i64.node()));
        assert!(!Node::Null.same_type(&Node::Null));
    }
}
