//! Percentage-of-total breakdowns with stable chart colors.

pub mod service;
pub mod types;

pub use service::aggregate;
pub use types::{ASSET_PALETTE, BreakdownSlice, LIABILITY_PALETTE};
