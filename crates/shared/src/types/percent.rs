//! Percentage values held as integer tenths of a percent.
//!
//! Intermediate percentage math stays on integers so repeated renders never
//! accumulate rounding drift; conversion to and from `f64` happens in exactly
//! two places, both display-boundary seams.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A signed percentage in tenths of a percent (`123` == `12.3%`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PercentTenths(i64);

impl PercentTenths {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Creates a percentage from a tenths-of-a-percent count.
    #[must_use]
    pub const fn from_tenths(tenths: i64) -> Self {
        Self(tenths)
    }

    /// The raw tenths count.
    #[must_use]
    pub const fn tenths(self) -> i64 {
        self.0
    }

    /// The share of `part` in `whole`, rounded half-away-from-zero to one
    /// decimal place. A zero `whole` yields zero, never a division error.
    #[must_use]
    pub fn ratio(part: i64, whole: i64) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        Self(div_round_half_away(
            i128::from(part) * 1000,
            i128::from(whole),
        ))
    }

    /// Converts a wire-side float percentage (e.g. `4.27`) to tenths.
    ///
    /// Non-finite input degrades to zero rather than propagating NaN.
    #[must_use]
    #[allow(clippy::float_arithmetic, clippy::cast_possible_truncation)]
    pub fn from_wire(value: f64) -> Self {
        if value.is_finite() {
            Self((value * 10.0).round() as i64)
        } else {
            Self::ZERO
        }
    }

    /// The percentage as a float, for display-only consumers.
    #[must_use]
    #[allow(clippy::float_arithmetic, clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }

    /// Formats with an explicit leading sign, e.g. `+4.2%` / `-0.3%`.
    #[must_use]
    pub fn signed_string(self) -> String {
        if self.0 >= 0 {
            format!("+{self}")
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for PercentTenths {
    /// Formats to one decimal place, e.g. `12.3%` / `-0.5%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{}.{}%", tenths / 10, tenths % 10)
    }
}

impl Serialize for PercentTenths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for PercentTenths {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_wire(f64::deserialize(deserializer)?))
    }
}

/// Integer division rounding half away from zero. `den` must be nonzero.
#[allow(clippy::cast_possible_truncation)]
fn div_round_half_away(num: i128, den: i128) -> i64 {
    let twice = num * 2;
    let rounded = if (twice >= 0) == (den >= 0) {
        (twice + den) / (den * 2)
    } else {
        (twice - den) / (den * 2)
    };
    rounded as i64
}
