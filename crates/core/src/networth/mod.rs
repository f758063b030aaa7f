//! Normalized net-worth records.

pub mod types;

pub use types::{NetWorthSummary, TrendPoint, asset_type_label, liability_type_label};
