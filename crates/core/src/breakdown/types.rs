//! Breakdown data types and chart palettes.

use finchboard_shared::{Money, PercentTenths};
use serde::Serialize;

/// Chart colors for asset slices, assigned round-robin by position.
pub const ASSET_PALETTE: &[&str] = &[
    "#3b82f6", "#22c55e", "#a855f7", "#fb923c", "#ec4899", "#0ea5e9", "#84cc16", "#facc15",
];

/// Chart colors for liability slices, assigned round-robin by position.
pub const LIABILITY_PALETTE: &[&str] = &["#ef4444", "#f97316", "#ea580c", "#dc2626", "#b91c1c"];

/// One slice of a percentage-of-total breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownSlice {
    /// Category or type label.
    pub label: String,
    /// Total amount for the slice.
    pub amount: Money,
    /// Share of the grand total; zero when the grand total is zero.
    pub percent: PercentTenths,
    /// Palette color assigned to the slice.
    pub color: &'static str,
}
