//! Alert data types.

use finchboard_shared::{Money, PercentTenths};
use serde::{Deserialize, Serialize};

/// Presentation tier for an alert.
///
/// Severity is supplied per-event by the upstream data source; this layer
/// only maps the incoming tag to a tier. Unrecognized tags fail safe to
/// `Unclassified` so a malformed entry can never block the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Needs immediate attention.
    Critical,
    /// Worth a look.
    Warning,
    /// Purely informational.
    Info,
    /// Tag was missing or unrecognized.
    Unclassified,
}

impl Severity {
    /// Maps a wire severity tag to a tier, case-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            t if t.eq_ignore_ascii_case("critical") => Self::Critical,
            t if t.eq_ignore_ascii_case("warning") => Self::Warning,
            t if t.eq_ignore_ascii_case("info") => Self::Info,
            _ => Self::Unclassified,
        }
    }

    /// Display icon for the tier.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Critical => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
            Self::Unclassified => "📢",
        }
    }

    /// Accent token for the tier, consumed by the presentation layer.
    #[must_use]
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Warning => "yellow",
            Self::Info => "blue",
            Self::Unclassified => "gray",
        }
    }
}

/// A change event reported by the net-worth alert feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Event kind tag from the server.
    pub alert_type: String,
    /// Presentation tier.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Signed change amount, when the event carries one.
    pub change_amount: Option<Money>,
    /// Signed change percentage, when the event carries one.
    pub change_percentage: Option<PercentTenths>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("critical", Severity::Critical)]
    #[case("warning", Severity::Warning)]
    #[case("info", Severity::Info)]
    #[case("CRITICAL", Severity::Critical)]
    #[case("Warning", Severity::Warning)]
    #[case("fatal", Severity::Unclassified)]
    #[case("", Severity::Unclassified)]
    fn test_from_tag(#[case] tag: &str, #[case] expected: Severity) {
        assert_eq!(Severity::from_tag(tag), expected);
    }

    #[test]
    fn test_every_tier_has_icon_and_accent() {
        for severity in [
            Severity::Critical,
            Severity::Warning,
            Severity::Info,
            Severity::Unclassified,
        ] {
            assert!(!severity.icon().is_empty());
            assert!(!severity.accent().is_empty());
        }
    }
}
