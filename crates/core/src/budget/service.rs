//! Budget classification rules.

use finchboard_shared::Money;

use super::types::{AllocationStanding, BudgetPeriod, BudgetStatus, PeriodSummary, SpendProgress};

/// Budget classification service.
///
/// Every function here is total over well-typed input: classification
/// degrades numerically (zero allocations classify as `Empty`) instead of
/// failing.
pub struct BudgetService;

impl BudgetService {
    /// Classify how allocations relate to income.
    #[must_use]
    pub fn classify_budget(total_allocated: Money, income: Money) -> BudgetStatus {
        match total_allocated.cmp(&income) {
            std::cmp::Ordering::Equal => BudgetStatus::Balanced,
            std::cmp::Ordering::Less => BudgetStatus::Unallocated,
            std::cmp::Ordering::Greater => BudgetStatus::OverBudget,
        }
    }

    /// Classify spend progress from the spent/allocated ratio.
    ///
    /// Boundaries are closed on the lower class: exactly 50% is `Low`,
    /// exactly 80% is `Moderate`, exactly 100% is `High`. Comparisons are
    /// integer arithmetic on cents; no float ratio is ever formed.
    #[must_use]
    pub fn classify_spend_progress(spent: Money, allocated: Money) -> SpendProgress {
        if allocated.is_zero() {
            return SpendProgress::Empty;
        }
        let spent = i128::from(spent.cents());
        let allocated = i128::from(allocated.cents());
        if spent * 2 <= allocated {
            SpendProgress::Low
        } else if spent * 5 <= allocated * 4 {
            SpendProgress::Moderate
        } else if spent <= allocated {
            SpendProgress::High
        } else {
            SpendProgress::Over
        }
    }

    /// Positive over-budget magnitude, or `None` when within budget.
    #[must_use]
    pub fn overspend(spent: Money, allocated: Money) -> Option<Money> {
        (spent > allocated).then(|| spent - allocated)
    }

    /// Derived standing of a single allocation.
    #[must_use]
    pub fn allocation_standing(spent: Money, allocated: Money) -> AllocationStanding {
        let overspend = Self::overspend(spent, allocated);
        AllocationStanding {
            progress: Self::classify_spend_progress(spent, allocated),
            remaining: if overspend.is_some() {
                Money::ZERO
            } else {
                allocated - spent
            },
            overspend,
        }
    }

    /// Derived summary of a whole period.
    #[must_use]
    pub fn summarize(period: &BudgetPeriod) -> PeriodSummary {
        let total_allocated = period.total_allocated();
        PeriodSummary {
            total_allocated,
            remaining: period.income - total_allocated,
            status: Self::classify_budget(total_allocated, period.income),
        }
    }
}
