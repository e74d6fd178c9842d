//! Collection equality checks.
//!
//! Pure decisions over two optional slices and an item predicate. The
//! [`Comparer`](crate::compare::Comparer) wraps these with logging and
//! diagnostics; nothing here writes output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How order-independent equality is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalenceCheck {
    /// Every item needs a counterpart, and when it has several the first
    /// collection must hold as many items matching it as the second does.
    #[default]
    DuplicateCount,
    /// One-to-one pairing of items (augmenting-path bipartite matching).
    /// Exact multiset equality even for predicates that are not an
    /// equivalence relation.
    ExactMatching,
}

/// First reason two collections were found to differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollectionMismatch {
    /// Exactly one of the collections is absent
    OneNull,
    LengthMismatch { len_one: usize, len_two: usize },
    /// Ordered comparison: first position whose items differ
    ItemMismatch { index: usize },
    /// Item of the first collection with nothing matching it in the second
    NoCounterpart { index: usize },
    DuplicateCountMismatch { in_first: usize, in_second: usize },
    /// Exact matching: item of the first collection left without a partner
    Unmatched { index: usize },
}

impl fmt::Display for CollectionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionMismatch::OneNull => {
                f.write_str("Collections unequal due to one item being null.")
            }
            CollectionMismatch::LengthMismatch { len_one, len_two } => write!(
                f,
                "Collections unequal due to different sizes. Collection 1 size: {} Collection 2 size: {}",
                len_one, len_two
            ),
            CollectionMismatch::ItemMismatch { index } => write!(
                f,
                "Collections unequal due to items at index {} being unequal.",
                index
            ),
            CollectionMismatch::NoCounterpart { index } => write!(
                f,
                "Collections unequal due to no matching item found in second collection for item at index {}.",
                index
            ),
            CollectionMismatch::DuplicateCountMismatch {
                in_first,
                in_second,
            } => write!(
                f,
                "Collections unequal due to more than the expected number of matching items found in second collection. \
                 Items matching condition in first collection: {}, Items matching condition in second collection: {}",
                in_first, in_second
            ),
            CollectionMismatch::Unmatched { index } => write!(
                f,
                "Collections unequal due to no one-to-one pairing for item at index {} of first collection.",
                index
            ),
        }
    }
}

/// Null and length checks shared by both modes. `Ok(None)` means both
/// collections are absent (equal).
fn present<'a, T>(
    one: Option<&'a [T]>,
    two: Option<&'a [T]>,
) -> Result<Option<(&'a [T], &'a [T])>, CollectionMismatch> {
    match (one, two) {
        (None, None) => Ok(None),
        (Some(one), Some(two)) => {
            if one.len() != two.len() {
                return Err(CollectionMismatch::LengthMismatch {
                    len_one: one.len(),
                    len_two: two.len(),
                });
            }
            Ok(Some((one, two)))
        }
        _ => Err(CollectionMismatch::OneNull),
    }
}

/// Positional comparison; stops at the first differing pair.
///
/// # Errors
///
/// Returns the first mismatch found.
pub fn check_ordered<T, F>(
    one: Option<&[T]>,
    two: Option<&[T]>,
    mut item_equal: F,
) -> Result<(), CollectionMismatch>
where
    F: FnMut(&T, &T) -> bool,
{
    let Some((one, two)) = present(one, two)? else {
        return Ok(());
    };

    match one.iter().zip(two).position(|(a, b)| !item_equal(a, b)) {
        Some(index) => Err(CollectionMismatch::ItemMismatch { index }),
        None => Ok(()),
    }
}

/// Order-independent comparison.
///
/// # Errors
///
/// Returns the first mismatch found.
pub fn check_equivalent<T, F>(
    one: Option<&[T]>,
    two: Option<&[T]>,
    check: EquivalenceCheck,
    item_equal: F,
) -> Result<(), CollectionMismatch>
where
    F: FnMut(&T, &T) -> bool,
{
    let Some((one, two)) = present(one, two)? else {
        return Ok(());
    };

    match check {
        EquivalenceCheck::DuplicateCount => duplicate_count(one, two, item_equal),
        EquivalenceCheck::ExactMatching => exact_matching(one, two, item_equal),
    }
}

fn duplicate_count<T, F>(one: &[T], two: &[T], mut item_equal: F) -> Result<(), CollectionMismatch>
where
    F: FnMut(&T, &T) -> bool,
{
    for (index, item) in one.iter().enumerate() {
        let in_second = two.iter().filter(|other| item_equal(item, *other)).count();
        if in_second == 0 {
            return Err(CollectionMismatch::NoCounterpart { index });
        }
        if in_second > 1 {
            let in_first = one.iter().filter(|other| item_equal(item, *other)).count();
            if in_first != in_second {
                return Err(CollectionMismatch::DuplicateCountMismatch {
                    in_first,
                    in_second,
                });
            }
        }
    }
    Ok(())
}

fn exact_matching<T, F>(one: &[T], two: &[T], mut item_equal: F) -> Result<(), CollectionMismatch>
where
    F: FnMut(&T, &T) -> bool,
{
    // adjacency[i] lists the positions of `two` that item i of `one` may pair with
    let adjacency: Vec<Vec<usize>> = one
        .iter()
        .map(|a| {
            two.iter()
                .enumerate()
                .filter(|(_, b)| item_equal(a, *b))
                .map(|(j, _)| j)
                .collect()
        })
        .collect();

    if let Some(index) = adjacency.iter().position(Vec::is_empty) {
        return Err(CollectionMismatch::NoCounterpart { index });
    }

    let mut partner_of: Vec<Option<usize>> = vec![None; two.len()];
    for index in 0..one.len() {
        let mut visited = vec![false; two.len()];
        if !augment(index, &adjacency, &mut partner_of, &mut visited) {
            return Err(CollectionMismatch::Unmatched { index });
        }
    }
    Ok(())
}

/// Kuhn's augmenting path search from item `i` of the first collection.
fn augment(
    i: usize,
    adjacency: &[Vec<usize>],
    partner_of: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &j in &adjacency[i] {
        if visited[j] {
            continue;
        }
        visited[j] = true;
        let free = match partner_of[j] {
            None => true,
            Some(current) => augment(current, adjacency, partner_of, visited),
        };
        if free {
            partner_of[j] = Some(i);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: &i32, b: &i32) -> bool {
        a == b
    }

    #[test]
    fn test_ordered_null_and_length_rules() {
        assert_eq!(check_ordered::<i32, _>(None, None, eq), Ok(()));
        assert_eq!(
            check_ordered(Some(&[1][..]), None, eq),
            Err(CollectionMismatch::OneNull)
        );
        assert_eq!(
            check_ordered(Some(&[1][..]), Some(&[1, 2][..]), eq),
            Err(CollectionMismatch::LengthMismatch {
                len_one: 1,
                len_two: 2
            })
        );
    }

    #[test]
    fn test_ordered_reports_first_differing_index() {
        let mut calls = 0;
        let result = check_ordered(Some(&[1, 2, 3][..]), Some(&[1, 5, 6][..]), |a, b| {
            calls += 1;
            a == b
        });
        assert_eq!(result, Err(CollectionMismatch::ItemMismatch { index: 1 }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_equivalent_ignores_order() {
        for check in [EquivalenceCheck::DuplicateCount, EquivalenceCheck::ExactMatching] {
            assert_eq!(
                check_equivalent(Some(&[1, 2, 2][..]), Some(&[2, 1, 2][..]), check, eq),
                Ok(())
            );
        }
    }

    #[test]
    fn test_duplicate_count_mismatch() {
        assert_eq!(
            check_equivalent(
                Some(&[1, 2, 1][..]),
                Some(&[2, 2, 1][..]),
                EquivalenceCheck::DuplicateCount,
                eq
            ),
            Err(CollectionMismatch::DuplicateCountMismatch {
                in_first: 1,
                in_second: 2
            })
        );
    }

    #[test]
    fn test_no_counterpart() {
        assert_eq!(
            check_equivalent(
                Some(&[1, 4][..]),
                Some(&[1, 2][..]),
                EquivalenceCheck::DuplicateCount,
                eq
            ),
            Err(CollectionMismatch::NoCounterpart { index: 1 })
        );
    }

    #[test]
    fn test_exact_matching_catches_non_transitive_predicate() {
        // "within one" is not an equivalence; 1 and 3 both pair only with 2
        let near = |a: &i32, b: &i32| (a - b).abs() <= 1;
        let one = [1, 3];
        let two = [2, 10];
        assert!(check_equivalent(
            Some(&one[..]),
            Some(&two[..]),
            EquivalenceCheck::ExactMatching,
            near
        )
        .is_err());

        let one = [1, 3, 2];
        let two = [2, 2, 3];
        assert_eq!(
            check_equivalent(
                Some(&one[..]),
                Some(&two[..]),
                EquivalenceCheck::ExactMatching,
                near
            ),
            Ok(())
        );
    }

    #[test]
    fn test_exact_matching_needs_augmenting_path() {
        // greedy pairing of 0 with 'b' would strand item 1
        let one = ["ab", "b"];
        let two = ["b", "a"];
        let shares_letter = |x: &&str, y: &&str| x.chars().any(|c| y.contains(c));
        assert_eq!(
            check_equivalent(
                Some(&one[..]),
                Some(&two[..]),
                EquivalenceCheck::ExactMatching,
                shares_letter
            ),
            Ok(())
        );
    }

    #[test]
    fn test_mismatch_messages() {
        assert_eq!(
            CollectionMismatch::ItemMismatch { index: 3 }.to_string(),
            "Collections unequal due to items at index 3 being unequal."
        );
        assert!(CollectionMismatch::LengthMismatch {
            len_one: 1,
            len_two: 0
        }
        .to_string()
        .contains("Collection 1 size: 1 Collection 2 size: 0"));
    }
}
