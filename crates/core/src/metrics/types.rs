//! Invoice metrics data types.

use chrono::NaiveDate;
use finchboard_shared::Money;
use serde::{Deserialize, Serialize};

/// A single invoice row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice id.
    pub id: i64,
    /// Human-readable invoice number.
    pub invoice_number: String,
    /// Workflow status tag (draft, sent, paid, overdue...).
    pub status: String,
    /// Invoice total.
    pub total: Money,
    /// Unpaid balance.
    pub balance_due: Money,
    /// Payment due date, when set.
    pub due_date: Option<NaiveDate>,
}

/// Revenue for one month, as reported by the metrics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label, e.g. `2026-07`.
    pub month: String,
    /// Revenue received that month.
    pub revenue: Money,
}

/// A customer ranked by lifetime payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCustomer {
    /// Customer id.
    pub id: i64,
    /// Customer name.
    pub name: String,
    /// Total paid across all invoices.
    pub total_paid: Money,
}

/// Aggregate invoice/revenue metrics for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMetrics {
    /// Number of unpaid invoices.
    pub outstanding_count: u32,
    /// Total unpaid amount.
    pub outstanding_total: Money,
    /// Number of invoices past their due date.
    pub overdue_count: u32,
    /// Total overdue amount.
    pub overdue_total: Money,
    /// Revenue by month, oldest first.
    pub monthly_revenue: Vec<MonthlyRevenue>,
    /// Customers ranked by lifetime payments.
    pub top_customers: Vec<TopCustomer>,
}
