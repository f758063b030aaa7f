//! Net-worth data types.

use chrono::NaiveDate;
use finchboard_shared::{Money, PercentTenths};
use serde::{Deserialize, Serialize};

/// Point-in-time net-worth summary.
///
/// Change fields are absent until enough snapshot history exists; absent
/// is a valid state the presentation layer renders as "no data", not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSummary {
    /// Assets minus liabilities.
    pub net_worth: Money,
    /// Sum of active asset values.
    pub total_assets: Money,
    /// Sum of active liability balances.
    pub total_liabilities: Money,
    /// Sum of liquid asset values.
    pub liquid_assets: Money,
    /// Number of active assets.
    pub asset_count: u32,
    /// Number of active liabilities.
    pub liability_count: u32,
    /// Net-worth change over the trailing 30 days.
    pub change_30_days: Option<Money>,
    /// Net-worth change over the trailing 90 days.
    pub change_90_days: Option<Money>,
    /// Net-worth change over the trailing year.
    pub change_1_year: Option<Money>,
    /// Percentage change over the trailing 30 days.
    pub change_30_days_pct: Option<PercentTenths>,
    /// Percentage change over the trailing 90 days.
    pub change_90_days_pct: Option<PercentTenths>,
    /// Percentage change over the trailing year.
    pub change_1_year_pct: Option<PercentTenths>,
}

/// One point on the net-worth trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Snapshot date.
    pub date: NaiveDate,
    /// Net worth on that date.
    pub net_worth: Money,
    /// Total assets on that date.
    pub assets: Money,
    /// Total liabilities on that date.
    pub liabilities: Money,
}

/// Human label for an asset type tag; unknown tags pass through unchanged.
#[must_use]
pub fn asset_type_label(tag: &str) -> &str {
    match tag {
        "cash" => "Cash",
        "checking" => "Checking Account",
        "savings" => "Savings Account",
        "investment" => "Investment",
        "retirement" => "Retirement Account",
        "real_estate" => "Real Estate",
        "vehicle" => "Vehicle",
        "crypto" => "Cryptocurrency",
        "other" => "Other",
        _ => tag,
    }
}

/// Human label for a liability type tag; unknown tags pass through unchanged.
#[must_use]
pub fn liability_type_label(tag: &str) -> &str {
    match tag {
        "credit_card" => "Credit Card",
        "student_loan" => "Student Loan",
        "mortgage" => "Mortgage",
        "auto_loan" => "Auto Loan",
        "personal_loan" => "Personal Loan",
        "medical_debt" => "Medical Debt",
        "other" => "Other",
        _ => tag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_labels() {
        assert_eq!(asset_type_label("real_estate"), "Real Estate");
        assert_eq!(asset_type_label("crypto"), "Cryptocurrency");
        assert_eq!(asset_type_label("beanie_babies"), "beanie_babies");
    }

    #[test]
    fn test_liability_type_labels() {
        assert_eq!(liability_type_label("credit_card"), "Credit Card");
        assert_eq!(liability_type_label("medical_debt"), "Medical Debt");
        assert_eq!(liability_type_label("iou"), "iou");
    }
}
