//! Declarative macros generating `Inspect` implementations
//!
//! These play the role of reflection: they list a type's properties in
//! declaration order and pick its leaf comparison strategy.

/// Implement `Inspect` for a struct by listing its properties.
///
/// The optional `eq` / `ord` marker gives the type its own equality
/// (`PartialEq`) or ordering (`Ord`). Properties are still enumerated when
/// the value is compared at the top level or recursed into.
///
/// # Example
///
/// ```
/// use likeness_core::inspect_record;
///
/// #[derive(Debug)]
/// struct Customer {
///     id: u64,
///     name: String,
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// inspect_record!(Customer { id, name });
/// inspect_record!(Money: eq { amount, currency });
/// ```
#[macro_export]
macro_rules! inspect_record {
    ($ty:ty : eq { $($field:ident),* $(,)? }) => {
        impl $crate::inspect::Inspect for $ty {
            fn strategy(&self) -> $crate::inspect::Strategy {
                $crate::inspect::Strategy::Custom
            }

            fn fields(&self) -> Vec<$crate::inspect::Field<'_>> {
                vec![$($crate::inspect::Field::new(stringify!($field), &self.$field)),*]
            }

            fn eq_dyn(&self, other: &dyn $crate::inspect::Inspect) -> bool {
                $crate::inspect::eq_by_value(self, other)
            }
        }
    };
    ($ty:ty : ord { $($field:ident),* $(,)? }) => {
        impl $crate::inspect::Inspect for $ty {
            fn strategy(&self) -> $crate::inspect::Strategy {
                $crate::inspect::Strategy::Ordered
            }

            fn fields(&self) -> Vec<$crate::inspect::Field<'_>> {
                vec![$($crate::inspect::Field::new(stringify!($field), &self.$field)),*]
            }

            fn eq_dyn(&self, other: &dyn $crate::inspect::Inspect) -> bool {
                $crate::inspect::eq_by_value(self, other)
            }

            fn cmp_dyn(
                &self,
                other: &dyn $crate::inspect::Inspect,
            ) -> Option<::std::cmp::Ordering> {
                $crate::inspect::cmp_by_ord(self, other)
            }
        }
    };
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::inspect::Inspect for $ty {
            fn fields(&self) -> Vec<$crate::inspect::Field<'_>> {
                vec![$($crate::inspect::Field::new(stringify!($field), &self.$field)),*]
            }
        }
    };
}

/// Implement `Inspect` for fixed-size value types (typically `Copy` enums)
/// compared by `PartialEq` and never traversed.
#[macro_export]
macro_rules! inspect_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                fn strategy(&self) -> $crate::inspect::Strategy {
                    $crate::inspect::Strategy::Value
                }

                fn eq_dyn(&self, other: &dyn $crate::inspect::Inspect) -> bool {
                    $crate::inspect::eq_by_value(self, other)
                }
            }
        )+
    };
}

/// Implement `Inspect` for leaf types compared through `Ord`.
#[macro_export]
macro_rules! inspect_ordered {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                fn strategy(&self) -> $crate::inspect::Strategy {
                    $crate::inspect::Strategy::Ordered
                }

                fn eq_dyn(&self, other: &dyn $crate::inspect::Inspect) -> bool {
                    $crate::inspect::eq_by_value(self, other)
                }

                fn cmp_dyn(
                    &self,
                    other: &dyn $crate::inspect::Inspect,
                ) -> Option<::std::cmp::Ordering> {
                    $crate::inspect::cmp_by_ord(self, other)
                }
            }
        )+
    };
}

/// Implement `Inspect` for leaf types with their own `PartialEq`.
#[macro_export]
macro_rules! inspect_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                fn strategy(&self) -> $crate::inspect::Strategy {
                    $crate::inspect::Strategy::Custom
                }

                fn eq_dyn(&self, other: &dyn $crate::inspect::Inspect) -> bool {
                    $crate::inspect::eq_by_value(self, other)
                }
            }
        )+
    };
}
