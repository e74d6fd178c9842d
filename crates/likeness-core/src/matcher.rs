//! Argument matchers for mocking frameworks.
//!
//! Each matcher captures an expected value and returns a predicate over
//! the argument a mocked method received, for use with e.g. `mockall`'s
//! `withf`. Matchers built from a [`Comparer`] write failed-match reports
//! to that comparer's sink; the free functions use a default comparer and
//! write to standard output.
//!
//! ```
//! use likeness_core::compare::Comparer;
//! use likeness_core::diagnostics::MemorySink;
//! use likeness_core::matcher::collection_equivalent;
//!
//! let matches = collection_equivalent(vec![1u32, 2, 3]);
//! assert!(matches(&[3, 1, 2]));
//!
//! let sink = MemorySink::new();
//! let matches = Comparer::new()
//!     .with_sink(sink.clone())
//!     .collection_equal_matcher(vec![1u32, 2]);
//! assert!(!matches(&[2, 1]));
//! assert!(sink.contains("index 0"));
//! ```

use crate::compare::Comparer;
use crate::inspect::Inspect;
use crate::policy::ComparisonPolicy;

impl Comparer {
    /// Matches a value structurally equal to `expected` under `policy`.
    pub fn properties_matcher<T>(
        &self,
        expected: T,
        policy: ComparisonPolicy,
    ) -> impl Fn(&T) -> bool + Send + Sync + 'static
    where
        T: Inspect + Send + Sync,
    {
        let comparer = self.clone();
        move |actual: &T| comparer.properties_equal(&expected, actual, &policy)
    }

    /// Matches a slice holding the same items in the same order.
    pub fn collection_equal_matcher<T>(
        &self,
        expected: Vec<T>,
    ) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
    where
        T: Inspect + Send + Sync,
    {
        let comparer = self.clone();
        move |actual: &[T]| comparer.collections_equal(Some(expected.as_slice()), Some(actual))
    }

    /// Matches a slice holding the same items in any order.
    pub fn collection_equivalent_matcher<T>(
        &self,
        expected: Vec<T>,
    ) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
    where
        T: Inspect + Send + Sync,
    {
        let comparer = self.clone();
        move |actual: &[T]| comparer.collections_equivalent(Some(expected.as_slice()), Some(actual))
    }

    /// Matches a slice whose items are, position by position, structurally
    /// equal to `expected`.
    pub fn collection_equal_by_properties_matcher<T>(
        &self,
        expected: Vec<T>,
        policy: ComparisonPolicy,
    ) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
    where
        T: Inspect + Send + Sync,
    {
        let comparer = self.clone();
        move |actual: &[T]| {
            comparer.collections_equal_by_properties(
                Some(expected.as_slice()),
                Some(actual),
                &policy,
            )
        }
    }

    /// Matches a slice whose items are structurally equal to `expected` in
    /// any order.
    pub fn collection_equivalent_by_properties_matcher<T>(
        &self,
        expected: Vec<T>,
        policy: ComparisonPolicy,
    ) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
    where
        T: Inspect + Send + Sync,
    {
        let comparer = self.clone();
        move |actual: &[T]| {
            comparer.collections_equivalent_by_properties(
                Some(expected.as_slice()),
                Some(actual),
                &policy,
            )
        }
    }
}

pub fn properties_match<T>(
    expected: T,
    policy: ComparisonPolicy,
) -> impl Fn(&T) -> bool + Send + Sync + 'static
where
    T: Inspect + Send + Sync,
{
    Comparer::default().properties_matcher(expected, policy)
}

pub fn collection_equal<T>(expected: Vec<T>) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
where
    T: Inspect + Send + Sync,
{
    Comparer::default().collection_equal_matcher(expected)
}

pub fn collection_equivalent<T>(expected: Vec<T>) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
where
    T: Inspect + Send + Sync,
{
    Comparer::default().collection_equivalent_matcher(expected)
}

pub fn collection_equal_by_properties<T>(
    expected: Vec<T>,
    policy: ComparisonPolicy,
) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
where
    T: Inspect + Send + Sync,
{
    Comparer::default().collection_equal_by_properties_matcher(expected, policy)
}

pub fn collection_equivalent_by_properties<T>(
    expected: Vec<T>,
    policy: ComparisonPolicy,
) -> impl Fn(&[T]) -> bool + Send + Sync + 'static
where
    T: Inspect + Send + Sync,
{
    Comparer::default().collection_equivalent_by_properties_matcher(expected, policy)
}
