//! Paycheck splitting using the Largest Remainder Method.
//!
//! Splits work in integer cents throughout:
//! 1. Compute each category's exact share numerator
//! 2. Floor-divide to get base allocations
//! 3. Hand the leftover cents to the categories with the largest remainders
//!
//! The sum of the parts always exactly equals the input; no cents are lost
//! or created.

use finchboard_shared::Money;

/// Split a paycheck evenly across `count` categories.
///
/// Leftover cents go to the earliest categories.
///
/// # Example
///
/// ```
/// use finchboard_core::paycheck::split_even;
/// use finchboard_shared::Money;
///
/// let parts = split_even(Money::from_cents(100), 3);
/// assert_eq!(
///     parts,
///     vec![
///         Money::from_cents(34),
///         Money::from_cents(33),
///         Money::from_cents(33),
///     ]
/// );
/// assert_eq!(parts.into_iter().sum::<Money>(), Money::from_cents(100));
/// ```
#[must_use]
pub fn split_even(total: Money, count: usize) -> Vec<Money> {
    if count == 0 {
        return Vec::new();
    }
    let Ok(divisor) = i64::try_from(count) else {
        return Vec::new();
    };
    let base = total.cents().div_euclid(divisor);
    let leftover = total.cents().rem_euclid(divisor);
    (0..divisor)
        .map(|i| {
            if i < leftover {
                Money::from_cents(base + 1)
            } else {
                Money::from_cents(base)
            }
        })
        .collect()
}

/// Split a paycheck across categories in proportion to integer weights.
///
/// Zero-weight categories receive zero; an all-zero weight list yields
/// all-zero parts.
///
/// # Example
///
/// ```
/// use finchboard_core::paycheck::split_weighted;
/// use finchboard_shared::Money;
///
/// let parts = split_weighted(Money::from_cents(100), &[50, 30, 20]);
/// assert_eq!(
///     parts,
///     vec![
///         Money::from_cents(50),
///         Money::from_cents(30),
///         Money::from_cents(20),
///     ]
/// );
/// ```
#[must_use]
pub fn split_weighted(total: Money, weights: &[u32]) -> Vec<Money> {
    if weights.is_empty() {
        return Vec::new();
    }
    let weight_sum: i128 = weights.iter().map(|w| i128::from(*w)).sum();
    if weight_sum == 0 {
        return vec![Money::ZERO; weights.len()];
    }

    let total_cents = i128::from(total.cents());
    let mut parts = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    for (index, weight) in weights.iter().enumerate() {
        let numerator = total_cents * i128::from(*weight);
        parts.push(numerator.div_euclid(weight_sum));
        remainders.push((index, numerator.rem_euclid(weight_sum)));
    }

    let allocated: i128 = parts.iter().sum();
    let leftover = total_cents - allocated;

    // Largest remainder first; ties resolved by input position.
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let leftover = usize::try_from(leftover).unwrap_or(0);
    for (index, _) in remainders.iter().take(leftover) {
        parts[*index] += 1;
    }

    parts
        .into_iter()
        .map(|cents| Money::from_cents(i64::try_from(cents).unwrap_or(0)))
        .collect()
}
