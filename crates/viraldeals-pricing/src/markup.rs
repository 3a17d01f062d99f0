//! # Markup Module
//!
//! Determines the markup percentage applied to a supplier price: a tiered
//! base rate, then category/competition/uniqueness adjustments, then a
//! profitability floor.
//!
//! ## Base Markup Tiers
//! ```text
//! ┌──────────────────────┬─────────┬─────────────────────────────────────┐
//! │ Supplier Price       │ Markup  │ Rationale                           │
//! ├──────────────────────┼─────────┼─────────────────────────────────────┤
//! │ under ₹100           │  70%    │ Absolute margin too thin otherwise  │
//! │ ₹100    – ₹299       │  60%    │ Impulse-buy range                   │
//! │ ₹300    – ₹699       │  45%    │ Mid-range, moderate comparison      │
//! │ ₹700    – ₹1199      │  35%    │ Considered purchases                │
//! │ ₹1200   – ₹2000      │  25%    │ High-ticket, price-checked          │
//! │ ₹2001 and above      │  20%    │ Premium, thin percentage margins    │
//! └──────────────────────┴─────────┴─────────────────────────────────────┘
//! ```
//!
//! Tier bounds are whole rupees and inclusive on both ends. A fractional
//! supplier price between two tiers (₹299.50) matches no tier and takes
//! the conservative 15% fallback.
//!
//! ## Adjustment Order
//! ```text
//! base ──► × category ──► × competition ──► × 1.15 if unique ──► max(15%)
//! ```

use crate::money::Money;
use crate::types::{AdjustmentFactor, CompetitionLevel, MarkupRate, ProductCategory};

// =============================================================================
// Markup Constants
// =============================================================================

/// Markup for supplier prices under ₹100, where no tier applies.
pub const LOW_PRICE_MARKUP: MarkupRate = MarkupRate::from_percent(70);

/// Markup for supplier prices that fall between tier bounds.
pub const FALLBACK_MARKUP: MarkupRate = MarkupRate::from_percent(15);

/// Minimum markup after all adjustments. Adjustments below this would
/// price the product under its all-in cost.
pub const MARKUP_FLOOR: MarkupRate = MarkupRate::from_percent(15);

/// Bonus multiplier for products with a unique selling point.
pub const UNIQUE_VALUE_BONUS: AdjustmentFactor = AdjustmentFactor::from_hundredths(115);

/// A single row of the base markup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupTier {
    /// Lowest supplier price in the tier (inclusive).
    pub min: Money,
    /// Highest supplier price in the tier (inclusive).
    pub max: Money,
    /// Base markup for the tier.
    pub markup: MarkupRate,
}

const fn tier(min_paise: i64, max_paise: i64, percent: i64) -> MarkupTier {
    MarkupTier {
        min: Money::from_paise(min_paise),
        max: Money::from_paise(max_paise),
        markup: MarkupRate::from_percent(percent),
    }
}

/// The base markup table, highest markups at the cheap end.
pub const BASE_MARKUP_TIERS: [MarkupTier; 5] = [
    tier(10_000, 29_900, 60),
    tier(30_000, 69_900, 45),
    tier(70_000, 119_900, 35),
    tier(120_000, 200_000, 25),
    tier(200_100, i64::MAX, 20),
];

// =============================================================================
// Markup Determination
// =============================================================================

/// Looks up the base markup for a supplier price.
///
/// ## Example
/// ```rust
/// use viraldeals_pricing::{markup::base_markup, MarkupRate, Money};
///
/// assert_eq!(base_markup(Money::from_rupees(150)), MarkupRate::from_percent(60));
/// assert_eq!(base_markup(Money::from_rupees(2500)), MarkupRate::from_percent(20));
/// assert_eq!(base_markup(Money::from_rupees(45)), MarkupRate::from_percent(70));
/// ```
pub fn base_markup(supplier_price: Money) -> MarkupRate {
    for tier in &BASE_MARKUP_TIERS {
        if supplier_price >= tier.min && supplier_price <= tier.max {
            return tier.markup;
        }
    }

    if supplier_price < Money::from_rupees(100) {
        LOW_PRICE_MARKUP
    } else {
        FALLBACK_MARKUP
    }
}

/// Applies category, competition, and uniqueness adjustments to a base
/// markup, then clamps to the profitability floor.
///
/// Adjustments compound multiplicatively and the result is exact; see
/// [`MarkupRate`] for the scale argument.
///
/// ## Example
/// ```rust
/// use viraldeals_pricing::markup::adjusted_markup;
/// use viraldeals_pricing::{CompetitionLevel, MarkupRate, ProductCategory};
///
/// // 35% × 1.20 (beauty) × 1.15 (unique) = 48.3%
/// let markup = adjusted_markup(
///     MarkupRate::from_percent(35),
///     ProductCategory::Beauty,
///     CompetitionLevel::Medium,
///     true,
/// );
/// assert_eq!(markup.percent(), 48.3);
/// ```
pub fn adjusted_markup(
    base: MarkupRate,
    category: ProductCategory,
    competition: CompetitionLevel,
    has_unique_value: bool,
) -> MarkupRate {
    let mut markup = base
        .scaled_by(category.adjustment_factor())
        .scaled_by(competition.adjustment_factor());

    if has_unique_value {
        markup = markup.scaled_by(UNIQUE_VALUE_BONUS);
    }

    markup.max(MARKUP_FLOOR)
}

// =============================================================================
// Unit Tests
// =============================================================================
