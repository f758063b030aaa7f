//! Property-based tests for paycheck splitting.

use finchboard_shared::Money;
use proptest::prelude::*;

use super::split::{split_even, split_weighted};

fn paycheck() -> impl Strategy<Value = Money> {
    (0i64..100_000_000i64).prop_map(Money::from_cents)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Even splits always sum back to the input total.
    #[test]
    fn prop_split_even_sum_invariant(total in paycheck(), count in 1usize..50) {
        let parts = split_even(total, count);
        prop_assert_eq!(parts.len(), count);
        prop_assert_eq!(parts.into_iter().sum::<Money>(), total);
    }

    /// Even splits differ by at most one cent.
    #[test]
    fn prop_split_even_fair(total in paycheck(), count in 1usize..50) {
        let parts = split_even(total, count);
        let min = parts.iter().min().copied().unwrap_or(Money::ZERO);
        let max = parts.iter().max().copied().unwrap_or(Money::ZERO);
        prop_assert!((max - min).cents() <= 1);
    }

    /// Weighted splits always sum back to the input total.
    #[test]
    fn prop_split_weighted_sum_invariant(
        total in paycheck(),
        weights in prop::collection::vec(0u32..10_000, 1..20),
    ) {
        let parts = split_weighted(total, &weights);
        prop_assert_eq!(parts.len(), weights.len());
        if weights.iter().any(|w| *w > 0) {
            prop_assert_eq!(parts.into_iter().sum::<Money>(), total);
        } else {
            prop_assert!(parts.into_iter().all(Money::is_zero));
        }
    }
}
