//! Budget balance and spend-progress classification.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::BudgetService;
pub use types::{
    AllocationRecord, AllocationStanding, BudgetPeriod, BudgetStatus, CategoryTemplate,
    CategoryType, PeriodSummary, SpendProgress,
};
