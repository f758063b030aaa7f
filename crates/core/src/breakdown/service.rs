//! Breakdown aggregation.

use finchboard_shared::{Money, PercentTenths};

use super::types::BreakdownSlice;

/// Computes percentage-of-total shares for a list of typed totals.
///
/// Input order is preserved (slices are not re-sorted by value), so a
/// stable input order yields the same palette color for the same label
/// across renders. A zero grand total yields all-zero percentages; no
/// division by zero, no NaN.
#[must_use]
pub fn aggregate(entries: Vec<(String, Money)>, palette: &'static [&'static str]) -> Vec<BreakdownSlice> {
    let grand_total: Money = entries.iter().map(|(_, amount)| *amount).sum();
    entries
        .into_iter()
        .enumerate()
        .map(|(index, (label, amount))| BreakdownSlice {
            label,
            amount,
            percent: PercentTenths::ratio(amount.cents(), grand_total.cents()),
            color: palette[index % palette.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakdown::types::{ASSET_PALETTE, LIABILITY_PALETTE};

    fn entries(amounts: &[i64]) -> Vec<(String, Money)> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| (format!("type-{i}"), Money::from_cents(*cents)))
            .collect()
    }

    #[test]
    fn test_shares_of_total() {
        let slices = aggregate(entries(&[300, 100, 100]), ASSET_PALETTE);
        let tenths: Vec<i64> = slices.iter().map(|s| s.percent.tenths()).collect();
        assert_eq!(tenths, vec![600, 200, 200]);
        assert_eq!(tenths.iter().sum::<i64>(), 1000);
    }

    #[test]
    fn test_all_zero_amounts_degrade_to_zero() {
        let slices = aggregate(entries(&[0, 0, 0]), ASSET_PALETTE);
        assert!(slices.iter().all(|s| s.percent == PercentTenths::ZERO));
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(Vec::new(), ASSET_PALETTE).is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let slices = aggregate(
            vec![
                ("savings".to_string(), Money::from_cents(100)),
                ("cash".to_string(), Money::from_cents(900)),
            ],
            ASSET_PALETTE,
        );
        assert_eq!(slices[0].label, "savings");
        assert_eq!(slices[1].label, "cash");
    }

    #[test]
    fn test_palette_wraps_round_robin() {
        let slices = aggregate(entries(&[10, 10, 10, 10, 10, 10]), LIABILITY_PALETTE);
        assert_eq!(slices[0].color, LIABILITY_PALETTE[0]);
        assert_eq!(slices[4].color, LIABILITY_PALETTE[4]);
        assert_eq!(slices[5].color, LIABILITY_PALETTE[0]);
    }

    #[test]
    fn test_color_stable_for_stable_order() {
        let first = aggregate(entries(&[300, 100, 100]), ASSET_PALETTE);
        let second = aggregate(entries(&[300, 100, 100]), ASSET_PALETTE);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.color, b.color);
        }
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // 1/3 of the total: 33.333...% rounds to 33.3%
        let slices = aggregate(entries(&[100, 100, 100]), ASSET_PALETTE);
        assert_eq!(slices[0].percent.to_string(), "33.3%");
    }
}
