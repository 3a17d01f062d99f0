//! # Psychological Rounding Module
//!
//! Rounds raw prices to the charm price points Indian marketplace shoppers
//! expect (₹199, ₹499, ₹999, ...).
//!
//! ## The Three Bands
//! ```text
//! ┌──────────────────┬───────────────────────────────┬───────────────────┐
//! │ Raw Price        │ Rule                          │ Examples          │
//! ├──────────────────┼───────────────────────────────┼───────────────────┤
//! │ under ₹100       │ down to nearest ₹10, plus 9   │ ₹85    → ₹89      │
//! │ ₹100 – ₹999.99   │ down to nearest ₹100, plus 99 │ ₹312.40 → ₹399    │
//! │ ₹1000 and above  │ nearest ₹X99 / ₹X499 anchor   │ ₹2200  → ₹2199    │
//! │                  │                               │ ₹3790  → ₹3499    │
//! └──────────────────┴───────────────────────────────┴───────────────────┘
//! ```
//!
//! Above ₹1000 the hundreds digit decides the anchor: digits 0-4 pull the
//! price just under its own hundred (₹2200 → ₹2199), digits 5-9 pull it
//! down to the half-thousand anchor (₹3790 → ₹3499). The result can sit
//! slightly above the raw price in the lower bands (₹312.40 → ₹399) and
//! below it in the top band.
//!
//! The top band is deliberately not a fixed point: ₹1499 re-rounds to
//! ₹1399. Rounding happens exactly once, at the end of the pipeline.

use crate::money::Money;

/// Rounds a price to its psychological price point.
///
/// Whole-rupee arithmetic with floor semantics; fractional paise in the
/// input only matter for selecting the band.
///
/// ## Example
/// ```rust
/// use viraldeals_pricing::rounding::psychological;
/// use viraldeals_pricing::Money;
///
/// assert_eq!(psychological(Money::from_rupees(85)), Money::from_rupees(89));
/// assert_eq!(psychological(Money::from_rupees(750)), Money::from_rupees(799));
/// assert_eq!(psychological(Money::from_rupees(1500)), Money::from_rupees(1499));
/// ```
pub fn psychological(price: Money) -> Money {
    let paise = price.paise();

    // Under ₹100: floor to the ₹10 step, then land on ₹X9
    if paise < 10_000 {
        return Money::from_paise(paise.div_euclid(1_000) * 1_000 + 900);
    }

    // Under ₹1000: floor to the ₹100 step, then land on ₹X99
    if paise < 100_000 {
        return Money::from_paise(paise.div_euclid(10_000) * 10_000 + 9_900);
    }

    // ₹1000 and up: the hundreds digit picks the anchor
    let hundreds = paise.div_euclid(10_000);
    let digit = hundreds.rem_euclid(10);
    if digit < 5 {
        Money::from_paise(hundreds * 10_000 - 100)
    } else {
        Money::from_paise((hundreds - digit + 4) * 10_000 + 9_900)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_hundred_band() {
        assert_eq!(psychological(Money::from_rupees(85)), Money::from_rupees(89));
        assert_eq!(psychological(Money::from_rupees(42)), Money::from_rupees(49));
        assert_eq!(psychological(Money::from_paise(9_999)), Money::from_rupees(99));
    }

    #[test]
    fn test_hundreds_band() {
        assert_eq!(psychological(Money::from_rupees(750)), Money::from_rupees(799));
        assert_eq!(psychological(Money::from_paise(31_240)), Money::from_rupees(399));
        assert_eq!(psychological(Money::from_rupees(100)), Money::from_rupees(199));
        assert_eq!(psychological(Money::from_paise(99_999)), Money::from_rupees(999));
    }

    #[test]
    fn test_thousands_band_low_hundreds_digit() {
        // Hundreds digit 0-4: just under its own hundred
        assert_eq!(psychological(Money::from_rupees(2200)), Money::from_rupees(2199));
        assert_eq!(psychological(Money::from_rupees(1000)), Money::from_rupees(999));
        assert_eq!(psychological(Money::from_rupees(1499)), Money::from_rupees(1399));
    }

    #[test]
    fn test_thousands_band_high_hundreds_digit() {
        // Hundreds digit 5-9: down to the half-thousand anchor
        assert_eq!(psychological(Money::from_rupees(1500)), Money::from_rupees(1499));
        assert_eq!(psychological(Money::from_rupees(3790)), Money::from_rupees(3499));
        assert_eq!(psychological(Money::from_rupees(1990)), Money::from_rupees(1499));
    }

    #[test]
    fn test_lower_bands_are_fixed_points() {
        // A price that is already ₹X9 or ₹X99 below ₹1000 stays put
        for rupees in (1..1000).step_by(37) {
            let once = psychological(Money::from_rupees(rupees));
            let twice = psychological(once);
            assert_eq!(once, twice, "at ₹{rupees}");
        }
    }

    #[test]
    fn test_negative_price_floors_downward() {
        // Mechanical flow for out-of-domain inputs: floor, then anchor
        assert_eq!(psychological(Money::from_rupees(-50)), Money::from_rupees(-41));
    }
}
