#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{Item, Line, Money};
use likeness_core::compare::EquivalenceCheck;
use likeness_core::diagnostics::NullSink;
use likeness_core::{Comparer, ComparisonPolicy};
use proptest::prelude::*;

fn quiet() -> Comparer {
    Comparer::new().with_sink(NullSink)
}

fn arb_item() -> impl Strategy<Value = Item> {
    (0u32..20, "[a-c]{0,3}").prop_map(|(id, desc)| Item { id, desc })
}

fn arb_line() -> impl Strategy<Value = Line> {
    ("[A-Z]-[0-9]", 0u32..5, -500i64..500).prop_map(|(sku, qty, cents)| Line {
        sku,
        qty,
        price: Money {
            cents,
            currency: "EUR",
        },
    })
}

fn arb_policy() -> impl Strategy<Value = ComparisonPolicy> {
    (any::<bool>(), prop::sample::select(vec!["", "sku", "qty", "price"])).prop_map(
        |(recursive, ignored)| {
            let mut policy = ComparisonPolicy::new();
            if recursive {
                policy = policy.recursive();
            }
            if !ignored.is_empty() {
                policy = policy.ignoring([ignored]);
            }
            policy
        },
    )
}

proptest! {
    #[test]
    fn prop_comparison_is_reflexive(lines in prop::collection::vec(arb_line(), 0..6), policy in arb_policy()) {
        let result = quiet().compare(&lines, &lines, &policy);
        prop_assert!(result.equal);
        prop_assert!(result.inequalities.is_empty());
    }

    #[test]
    fn prop_equal_flag_matches_records(a in prop::collection::vec(arb_line(), 0..4), b in prop::collection::vec(arb_line(), 0..4)) {
        let result = quiet().compare(&a, &b, &ComparisonPolicy::new().recursive());
        prop_assert_eq!(result.equal, result.inequalities.is_empty());
    }

    #[test]
    fn prop_permutation_is_equivalent(items in prop::collection::vec(arb_item(), 0..8), seed in any::<u64>()) {
        let mut shuffled = items.clone();
        // deterministic rotation keyed by the seed
        if !shuffled.is_empty() {
            let by = (seed as usize) % shuffled.len();
            shuffled.rotate_left(by);
            shuffled.reverse();
        }

        for check in [EquivalenceCheck::DuplicateCount, EquivalenceCheck::ExactMatching] {
            let comparer = quiet().with_equivalence(check);
            prop_assert!(comparer.collections_equivalent_by_properties(
                Some(&items[..]),
                Some(&shuffled[..]),
                &ComparisonPolicy::new(),
            ));
        }
    }

    #[test]
    fn prop_ordered_equal_to_clone(ids in prop::collection::vec(any::<u32>(), 0..10)) {
        let copy = ids.clone();
        prop_assert!(quiet().collections_equal(Some(&ids[..]), Some(&copy[..])));
        prop_assert!(quiet().collections_equivalent(Some(&ids[..]), Some(&copy[..])));
    }

    #[test]
    fn prop_different_lengths_never_equivalent(ids in prop::collection::vec(any::<u8>(), 1..10)) {
        let shorter = &ids[..ids.len() - 1];
        prop_assert!(!quiet().collections_equivalent(Some(&ids[..]), Some(shorter)));
        prop_assert!(!quiet().collections_equal(Some(&ids[..]), Some(shorter)));
    }
}
