//! Property-based tests for budget classification.

use finchboard_shared::Money;
use proptest::prelude::*;

use super::service::BudgetService;
use super::types::{BudgetStatus, SpendProgress};

/// Strategy for amounts up to $10M in either direction of zero.
fn amount() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(Money::from_cents)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every (allocated, income) pair maps to exactly one status, and the
    /// status always agrees with the sign of `allocated - income`.
    #[test]
    fn prop_budget_status_matches_sign(allocated in amount(), income in amount()) {
        let status = BudgetService::classify_budget(allocated, income);
        let difference = allocated.cents() - income.cents();
        let expected = match difference.signum() {
            0 => BudgetStatus::Balanced,
            -1 => BudgetStatus::Unallocated,
            _ => BudgetStatus::OverBudget,
        };
        prop_assert_eq!(status, expected);
    }

    /// With a positive allocation, spend progress is never `Empty` and
    /// never regresses as spending grows.
    #[test]
    fn prop_spend_progress_monotone_in_spent(
        spent in 0i64..1_000_000_000i64,
        extra in 0i64..1_000_000_000i64,
        allocated in 1i64..1_000_000_000i64,
    ) {
        fn rank(progress: SpendProgress) -> u8 {
            match progress {
                SpendProgress::Empty => 0,
                SpendProgress::Low => 1,
                SpendProgress::Moderate => 2,
                SpendProgress::High => 3,
                SpendProgress::Over => 4,
            }
        }

        let allocated = Money::from_cents(allocated);
        let before = BudgetService::classify_spend_progress(Money::from_cents(spent), allocated);
        let after =
            BudgetService::classify_spend_progress(Money::from_cents(spent + extra), allocated);
        prop_assert_ne!(before, SpendProgress::Empty);
        prop_assert!(rank(after) >= rank(before));
    }

    /// Overspend is reported if and only if progress is `Over`, and always
    /// as a positive amount equal to `spent - allocated`.
    #[test]
    fn prop_overspend_positive_iff_over(
        spent in 0i64..1_000_000_000i64,
        allocated in 1i64..1_000_000_000i64,
    ) {
        let spent = Money::from_cents(spent);
        let allocated = Money::from_cents(allocated);
        let progress = BudgetService::classify_spend_progress(spent, allocated);
        match BudgetService::overspend(spent, allocated) {
            Some(overage) => {
                prop_assert_eq!(progress, SpendProgress::Over);
                prop_assert!(overage.is_positive());
                prop_assert_eq!(overage, spent - allocated);
            }
            None => prop_assert_ne!(progress, SpendProgress::Over),
        }
    }
}
