//! Budget period and category template endpoints.

use finchboard_core::budget::{AllocationRecord, BudgetPeriod, CategoryTemplate, CategoryType};
use finchboard_shared::{ApiError, Money};
use serde::Deserialize;

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
pub(crate) struct PeriodResponseDto {
    budget: Option<PeriodBudgetDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PeriodBudgetDto {
    month: Option<u32>,
    year: Option<i32>,
    income_cents: Option<i64>,
    categories: Option<Vec<AllocationDto>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AllocationDto {
    name: Option<String>,
    allocated_cents: Option<i64>,
    spent_cents: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TemplateListDto {
    templates: Option<Vec<TemplateDto>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TemplateDto {
    name: Option<String>,
    category_type: Option<String>,
    icon: Option<String>,
    color: Option<String>,
    default_allocation_cents: Option<i64>,
}

impl AllocationDto {
    fn normalize(self) -> AllocationRecord {
        AllocationRecord {
            category: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Uncategorized".to_string()),
            allocated: Money::from_cents(self.allocated_cents.unwrap_or(0)),
            spent: Money::from_cents(self.spent_cents.unwrap_or(0)),
        }
    }
}

impl PeriodBudgetDto {
    /// Normalizes with the requested period as the fallback for missing
    /// fields; an out-of-range month is clamped into `1..=12`.
    fn normalize(self, requested_year: i32, requested_month: u32) -> BudgetPeriod {
        BudgetPeriod {
            month: self.month.unwrap_or(requested_month).clamp(1, 12),
            year: self.year.unwrap_or(requested_year),
            income: Money::from_cents(self.income_cents.unwrap_or(0)),
            allocations: self
                .categories
                .unwrap_or_default()
                .into_iter()
                .map(AllocationDto::normalize)
                .collect(),
        }
    }
}

impl TemplateDto {
    fn normalize(self) -> CategoryTemplate {
        CategoryTemplate {
            name: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Uncategorized".to_string()),
            category_type: CategoryType::from_tag(self.category_type.as_deref().unwrap_or("")),
            icon: self.icon.filter(|icon| !icon.is_empty()),
            color: self.color.filter(|color| !color.is_empty()),
            default_allocation: Money::from_cents(self.default_allocation_cents.unwrap_or(0)),
        }
    }
}

impl ApiClient {
    /// Fetches the budget period for a given year and month.
    ///
    /// Absence (404 or a null body) is the valid "no budget yet" state and
    /// returns `Ok(None)`, not an error.
    pub async fn budget_period(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Option<BudgetPeriod>, ApiError> {
        let path = format!("/api/budgets/period/{year}/{month}");
        match self.get_json::<PeriodResponseDto>(&path, &[]).await {
            Ok(dto) => Ok(dto.budget.map(|budget| budget.normalize(year, month))),
            Err(err) if err.is_expected_absence() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Fetches the category template catalog.
    pub async fn category_templates(&self) -> Result<Vec<CategoryTemplate>, ApiError> {
        let dto: TemplateListDto = self.get_json("/api/category-templates", &[]).await?;
        Ok(dto
            .templates
            .unwrap_or_default()
            .into_iter()
            .map(TemplateDto::normalize)
            .collect())
    }
}
