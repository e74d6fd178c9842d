//! `Inspect` implementations for standard library types.

use super::{cmp_by_ord, eq_by_value, Inspect, Node, Strategy};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

macro_rules! value_scalars {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn strategy(&self) -> Strategy {
                    Strategy::Value
                }

                fn eq_dyn(&self, other: &dyn Inspect) -> bool {
                    eq_by_value(self, other)
                }

                fn scalar_json(&self) -> Option<serde_json::Result<serde_json::Value>> {
                    Some(serde_json::to_value(self))
                }
            }
        )*
    };
}

value_scalars!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), Duration,
);

// NaN equals NaN here, so a float always equals itself.
macro_rules! float_scalars {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn strategy(&self) -> Strategy {
                    Strategy::Value
                }

                fn eq_dyn(&self, other: &dyn Inspect) -> bool {
                    other
                        .as_any()
                        .downcast_ref::<$ty>()
                        .is_some_and(|other| self == other || (self.is_nan() && other.is_nan()))
                }

                fn scalar_json(&self) -> Option<serde_json::Result<serde_json::Value>> {
                    Some(serde_json::to_value(self))
                }
            }
        )*
    };
}

float_scalars!(f32, f64);

macro_rules! ordered_scalars {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn strategy(&self) -> Strategy {
                    Strategy::Ordered
                }

                fn eq_dyn(&self, other: &dyn Inspect) -> bool {
                    eq_by_value(self, other)
                }

                fn cmp_dyn(&self, other: &dyn Inspect) -> Option<Ordering> {
                    cmp_by_ord(self, other)
                }

                fn scalar_json(&self) -> Option<serde_json::Result<serde_json::Value>> {
                    Some(serde_json::to_value(self))
                }
            }
        )*
    };
}

ordered_scalars!(String, &'static str);

// Transparent wrappers: every query is answered by the content.
macro_rules! transparent {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $wrapper<T> {
                fn strategy(&self) -> Strategy {
                    (**self).strategy()
                }

                fn node(&self) -> Node<'_> {
                    (**self).node()
                }

                fn fields(&self) -> Vec<super::Field<'_>> {
                    (**self).fields()
                }

                fn elements(&self) -> Option<Vec<Node<'_>>> {
                    (**self).elements()
                }

                fn eq_dyn(&self, other: &dyn Inspect) -> bool {
                    (**self).eq_dyn(other)
                }

                fn cmp_dyn(&self, other: &dyn Inspect) -> Option<Ordering> {
                    (**self).cmp_dyn(other)
                }

                fn scalar_json(&self) -> Option<serde_json::Result<serde_json::Value>> {
                    (**self).scalar_json()
                }
            }
        )*
    };
}

transparent!(Box, Rc, Arc);

impl<T: Inspect> Inspect for Option<T> {
    fn node(&self) -> Node<'_> {
        match self {
            Some(value) => value.node(),
            None => Node::Null,
        }
    }
}

macro_rules! sequences {
    ($($seq:ident),*) => {
        $(
            impl<T: Inspect> Inspect for $seq<T> {
                fn elements(&self) -> Option<Vec<Node<'_>>> {
                    Some(self.iter().map(|item| item.node()).collect())
                }
            }
        )*
    };
}

sequences!(Vec, VecDeque, BTreeSet);

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn elements(&self) -> Option<Vec<Node<'_>>> {
        Some(self.iter().map(|item| item.node()).collect())
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn elements(&self) -> Option<Vec<Node<'_>>> {
        Some(
            self.iter()
                .map(|(key, value)| Node::Pair { key, value })
                .collect(),
        )
    }
}

impl<K: Inspect, V: Inspect> Inspect for (K, V) {
    fn node(&self) -> Node<'_> {
        Node::Pair {
            key: &self.0,
            value: &self.1,
        }
    }
}
