//! Shared types, errors, and configuration for Finchboard.
//!
//! This crate provides common types used across all other crates:
//! - Money in integer minor units (cents)
//! - Percentages held as integer tenths until display
//! - API-boundary error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use types::{Money, PercentTenths};
