//! Budget data types.

use finchboard_shared::Money;
use serde::{Deserialize, Serialize};

/// One category's share of a budget period.
///
/// `spent` exceeding `allocated` is a valid, representable state, not an
/// error; it surfaces as [`SpendProgress::Over`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// Category name.
    pub category: String,
    /// Amount allocated to the category for the period.
    pub allocated: Money,
    /// Amount spent against the category so far.
    pub spent: Money,
}

/// A monthly budget period with its ordered allocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// Month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Income for the period.
    pub income: Money,
    /// Allocations in the order the server supplied them.
    pub allocations: Vec<AllocationRecord>,
}

impl BudgetPeriod {
    /// Sum of all allocated amounts.
    #[must_use]
    pub fn total_allocated(&self) -> Money {
        self.allocations.iter().map(|a| a.allocated).sum()
    }

    /// Income minus total allocated; negative when over-allocated.
    #[must_use]
    pub fn remaining(&self) -> Money {
        self.income - self.total_allocated()
    }
}

/// How a period's allocations relate to its income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Every cent of income is allocated.
    Balanced,
    /// Income remains unallocated.
    Unallocated,
    /// Allocations exceed income.
    OverBudget,
}

/// Spend progress against an allocation, classified by spent/allocated ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendProgress {
    /// Nothing allocated; the ratio is undefined.
    Empty,
    /// Ratio at or under 50%.
    Low,
    /// Ratio over 50%, at or under 80%.
    Moderate,
    /// Ratio over 80%, at or under 100%.
    High,
    /// Ratio over 100%.
    Over,
}

/// Derived summary for a budget period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of all allocated amounts.
    pub total_allocated: Money,
    /// Income minus total allocated.
    pub remaining: Money,
    /// Classification of the period.
    pub status: BudgetStatus,
}

/// Derived standing of a single allocation.
///
/// An over-budget allocation reports its overage as a positive amount with
/// the `Over` classification, never as a negative remaining number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationStanding {
    /// Spend progress classification.
    pub progress: SpendProgress,
    /// Allocated minus spent, floored at zero.
    pub remaining: Money,
    /// Positive overage when spent exceeds allocated.
    pub overspend: Option<Money>,
}

/// Category classification from the template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
    /// Money set aside.
    Savings,
    /// Unrecognized or missing type tag.
    #[serde(other)]
    Uncategorized,
}

impl CategoryType {
    /// Maps a wire tag to a category type, failing safe to `Uncategorized`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            t if t.eq_ignore_ascii_case("income") => Self::Income,
            t if t.eq_ignore_ascii_case("expense") => Self::Expense,
            t if t.eq_ignore_ascii_case("savings") => Self::Savings,
            _ => Self::Uncategorized,
        }
    }
}

/// A reusable category definition with a default allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    /// Template name.
    pub name: String,
    /// Category classification.
    pub category_type: CategoryType,
    /// Display icon, if the user picked one.
    pub icon: Option<String>,
    /// Display color, if the user picked one.
    pub color: Option<String>,
    /// Default allocation applied when the template is added to a budget.
    pub default_allocation: Money,
}
