//! Export filter serialization.

use chrono::NaiveDate;

/// Filters narrowing an export.
///
/// Fields that are absent - or carry a non-positive id, a zero year, or an
/// out-of-range month - are omitted from the query entirely rather than
/// sent as empty markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFilters {
    /// Restrict to one budget.
    pub budget_id: Option<i64>,
    /// Restrict to one category.
    pub category_id: Option<i64>,
    /// Include rows from this date onward.
    pub start_date: Option<NaiveDate>,
    /// Include rows up to this date.
    pub end_date: Option<NaiveDate>,
    /// Restrict to one calendar year.
    pub year: Option<i32>,
    /// Restrict to one month (1-12).
    pub month: Option<u32>,
}

impl ExportFilters {
    /// Serializes present fields into canonical query pairs.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(budget_id) = self.budget_id.filter(|id| *id > 0) {
            pairs.push(("budget_id", budget_id.to_string()));
        }
        if let Some(category_id) = self.category_id.filter(|id| *id > 0) {
            pairs.push(("category_id", category_id.to_string()));
        }
        if let Some(start_date) = self.start_date {
            pairs.push(("start_date", start_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(end_date) = self.end_date {
            pairs.push(("end_date", end_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(year) = self.year.filter(|year| *year != 0) {
            pairs.push(("year", year.to_string()));
        }
        if let Some(month) = self.month.filter(|month| (1..=12).contains(month)) {
            pairs.push(("month", month.to_string()));
        }
        pairs
    }
}
