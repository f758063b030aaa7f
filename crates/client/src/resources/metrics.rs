//! Invoice list and revenue metrics endpoints.

use chrono::NaiveDate;
use finchboard_core::metrics::{Invoice, InvoiceMetrics, MonthlyRevenue, TopCustomer};
use finchboard_shared::{ApiError, Money};
use serde::Deserialize;

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
pub(crate) struct InvoiceDto {
    id: Option<i64>,
    invoice_number: Option<String>,
    status: Option<String>,
    total_cents: Option<i64>,
    balance_due_cents: Option<i64>,
    due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetricsSummaryDto {
    outstanding_count: Option<u32>,
    outstanding_total_cents: Option<i64>,
    overdue_count: Option<u32>,
    overdue_total_cents: Option<i64>,
    monthly_revenue: Option<Vec<MonthlyRevenueDto>>,
    top_customers: Option<Vec<TopCustomerDto>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MonthlyRevenueDto {
    month: Option<String>,
    revenue_cents: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopCustomerDto {
    id: Option<i64>,
    name: Option<String>,
    total_paid_cents: Option<i64>,
}

impl InvoiceDto {
    fn normalize(self) -> Invoice {
        Invoice {
            id: self.id.unwrap_or(0),
            invoice_number: self.invoice_number.unwrap_or_default(),
            status: self.status.unwrap_or_else(|| "draft".to_string()),
            total: Money::from_cents(self.total_cents.unwrap_or(0)),
            balance_due: Money::from_cents(self.balance_due_cents.unwrap_or(0)),
            due_date: self
                .due_date
                .as_deref()
                .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()),
        }
    }
}

impl MetricsSummaryDto {
    fn normalize(self) -> InvoiceMetrics {
        InvoiceMetrics {
            outstanding_count: self.outstanding_count.unwrap_or(0),
            outstanding_total: Money::from_cents(self.outstanding_total_cents.unwrap_or(0)),
            overdue_count: self.overdue_count.unwrap_or(0),
            overdue_total: Money::from_cents(self.overdue_total_cents.unwrap_or(0)),
            monthly_revenue: self
                .monthly_revenue
                .unwrap_or_default()
                .into_iter()
                .map(|dto| MonthlyRevenue {
                    month: dto.month.unwrap_or_default(),
                    revenue: Money::from_cents(dto.revenue_cents.unwrap_or(0)),
                })
                .collect(),
            top_customers: self
                .top_customers
                .unwrap_or_default()
                .into_iter()
                .map(|dto| TopCustomer {
                    id: dto.id.unwrap_or(0),
                    name: dto.name.unwrap_or_default(),
                    total_paid: Money::from_cents(dto.total_paid_cents.unwrap_or(0)),
                })
                .collect(),
        }
    }
}

impl ApiClient {
    /// Fetches the invoice list.
    pub async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        let dtos: Vec<InvoiceDto> = self.get_json("/api/invoices", &[]).await?;
        Ok(dtos.into_iter().map(InvoiceDto::normalize).collect())
    }

    /// Fetches aggregate invoice/revenue metrics.
    pub async fn metrics_summary(&self) -> Result<InvoiceMetrics, ApiError> {
        let dto: MetricsSummaryDto = self.get_json("/api/metrics/summary", &[]).await?;
        Ok(dto.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_invoice() {
        let dto: InvoiceDto = serde_json::from_str(
            r#"{
                "id": 12,
                "invoice_number": "INV-0012",
                "status": "sent",
                "total_cents": 125000,
                "balance_due_cents": 125000,
                "due_date": "2026-09-01"
            }"#,
        )
        .unwrap();
        let invoice = dto.normalize();
        assert_eq!(invoice.invoice_number, "INV-0012");
        assert_eq!(invoice.total, Money::from_cents(125_000));
        assert_eq!(
            invoice.due_date,
            NaiveDate::from_ymd_opt(2026, 9, 1)
        );
    }

    #[test]
    fn test_normalize_invoice_defaults() {
        let dto: InvoiceDto = serde_json::from_str("{}").unwrap();
        let invoice = dto.normalize();
        assert_eq!(invoice.status, "draft");
        assert_eq!(invoice.balance_due, Money::ZERO);
        assert!(invoice.due_date.is_none());
    }

    #[test]
    fn test_normalize_metrics_summary() {
        let dto: MetricsSummaryDto = serde_json::from_str(
            r#"{
                "outstanding_count": 3,
                "outstanding_total_cents": 420000,
                "overdue_count": 1,
                "overdue_total_cents": 90000,
                "monthly_revenue": [{"month": "2026-07", "revenue_cents": 600000}],
                "top_customers": [{"id": 4, "name": "Acme Co", "total_paid_cents": 1500000}]
            }"#,
        )
        .unwrap();
        let metrics = dto.normalize();
        assert_eq!(metrics.outstanding_count, 3);
        assert_eq!(metrics.overdue_total, Money::from_cents(90_000));
        assert_eq!(metrics.monthly_revenue[0].month, "2026-07");
        assert_eq!(metrics.top_customers[0].name, "Acme Co");
    }

    #[test]
    fn test_normalize_metrics_summary_empty() {
        let dto: MetricsSummaryDto = serde_json::from_str("{}").unwrap();
        let metrics = dto.normalize();
        assert_eq!(metrics.outstanding_count, 0);
        assert!(metrics.monthly_revenue.is_empty());
        assert!(metrics.top_customers.is_empty());
    }
}
