//! Net-worth endpoints: summary, trends, alerts, breakdowns.

use chrono::NaiveDate;
use finchboard_core::alert::{ChangeEvent, Severity};
use finchboard_core::networth::{
    NetWorthSummary, TrendPoint, asset_type_label, liability_type_label,
};
use finchboard_shared::{ApiError, Money, PercentTenths};
use serde::Deserialize;

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryDto {
    current_net_worth: Option<i64>,
    total_assets: Option<i64>,
    total_liabilities: Option<i64>,
    liquid_assets: Option<i64>,
    asset_count: Option<u32>,
    liability_count: Option<u32>,
    change_30_days: Option<i64>,
    change_90_days: Option<i64>,
    change_1_year: Option<i64>,
    change_30_days_pct: Option<PercentTenths>,
    change_90_days_pct: Option<PercentTenths>,
    change_1_year_pct: Option<PercentTenths>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendPointDto {
    date: Option<String>,
    net_worth: Option<i64>,
    assets: Option<i64>,
    liabilities: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlertDto {
    alert_type: Option<String>,
    severity: Option<String>,
    message: Option<String>,
    change_amount: Option<i64>,
    change_percentage: Option<PercentTenths>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssetBreakdownDto {
    asset_type: Option<String>,
    total_value: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LiabilityBreakdownDto {
    liability_type: Option<String>,
    total_balance: Option<i64>,
}

impl SummaryDto {
    fn normalize(self) -> NetWorthSummary {
        NetWorthSummary {
            net_worth: Money::from_cents(self.current_net_worth.unwrap_or(0)),
            total_assets: Money::from_cents(self.total_assets.unwrap_or(0)),
            total_liabilities: Money::from_cents(self.total_liabilities.unwrap_or(0)),
            liquid_assets: Money::from_cents(self.liquid_assets.unwrap_or(0)),
            asset_count: self.asset_count.unwrap_or(0),
            liability_count: self.liability_count.unwrap_or(0),
            change_30_days: self.change_30_days.map(Money::from_cents),
            change_90_days: self.change_90_days.map(Money::from_cents),
            change_1_year: self.change_1_year.map(Money::from_cents),
            change_30_days_pct: self.change_30_days_pct,
            change_90_days_pct: self.change_90_days_pct,
            change_1_year_pct: self.change_1_year_pct,
        }
    }
}

impl TrendPointDto {
    /// A point without a parseable date cannot be plotted and is dropped.
    fn normalize(self) -> Option<TrendPoint> {
        let date = NaiveDate::parse_from_str(self.date.as_deref()?, "%Y-%m-%d").ok()?;
        Some(TrendPoint {
            date,
            net_worth: Money::from_cents(self.net_worth.unwrap_or(0)),
            assets: Money::from_cents(self.assets.unwrap_or(0)),
            liabilities: Money::from_cents(self.liabilities.unwrap_or(0)),
        })
    }
}

impl AlertDto {
    fn normalize(self) -> ChangeEvent {
        ChangeEvent {
            alert_type: self.alert_type.unwrap_or_default(),
            severity: Severity::from_tag(self.severity.as_deref().unwrap_or("")),
            message: self.message.unwrap_or_default(),
            change_amount: self.change_amount.map(Money::from_cents),
            change_percentage: self.change_percentage,
        }
    }
}

impl ApiClient {
    /// Fetches the current net-worth summary.
    pub async fn net_worth_summary(&self) -> Result<NetWorthSummary, ApiError> {
        let dto: SummaryDto = self.get_json("/api/net-worth/summary", &[]).await?;
        Ok(dto.normalize())
    }

    /// Fetches the net-worth trend line over the trailing `months`.
    pub async fn net_worth_trends(&self, months: u32) -> Result<Vec<TrendPoint>, ApiError> {
        let dtos: Vec<TrendPointDto> = self
            .get_json("/api/net-worth/trends", &[("months", months.to_string())])
            .await?;
        Ok(dtos.into_iter().filter_map(TrendPointDto::normalize).collect())
    }

    /// Fetches current change alerts.
    pub async fn net_worth_alerts(&self) -> Result<Vec<ChangeEvent>, ApiError> {
        let dtos: Vec<AlertDto> = self.get_json("/api/net-worth/alerts", &[]).await?;
        Ok(dtos.into_iter().map(AlertDto::normalize).collect())
    }

    /// Fetches asset totals by type as labeled breakdown inputs.
    pub async fn asset_breakdown(&self) -> Result<Vec<(String, Money)>, ApiError> {
        let dtos: Vec<AssetBreakdownDto> =
            self.get_json("/api/net-worth/breakdown/assets", &[]).await?;
        Ok(dtos
            .into_iter()
            .map(|dto| {
                let tag = dto.asset_type.unwrap_or_default();
                (
                    asset_type_label(&tag).to_string(),
                    Money::from_cents(dto.total_value.unwrap_or(0)),
                )
            })
            .collect())
    }

    /// Fetches liability totals by type as labeled breakdown inputs.
    pub async fn liability_breakdown(&self) -> Result<Vec<(String, Money)>, ApiError> {
        let dtos: Vec<LiabilityBreakdownDto> = self
            .get_json("/api/net-worth/breakdown/liabilities", &[])
            .await?;
        Ok(dtos
            .into_iter()
            .map(|dto| {
                let tag = dto.liability_type.unwrap_or_default();
                (
                    liability_type_label(&tag).to_string(),
                    Money::from_cents(dto.total_balance.unwrap_or(0)),
                )
            })
            .collect())
    }
}
