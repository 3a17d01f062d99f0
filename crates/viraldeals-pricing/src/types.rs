//! # Pricing Types Module
//!
//! Defines the fundamental types used across the pricing engine.
//!
//! ## Type Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RATES                FeeRate, MarkupRate, AdjustmentFactor            │
//! │  CLASSIFICATION       ProductCategory, CompetitionLevel                │
//! │  CONFIGURATION        CostFactors                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All rates are integers at a fixed scale so every step of the pricing
//! pipeline stays exact. Floats appear only at the display boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::PricingError;
use crate::money::Money;

// =============================================================================
// FeeRate Type
// =============================================================================

/// Represents a percentage fee in basis points (1 bps = 0.01%).
///
/// ## Why Basis Points?
/// - GST is 18% = 1800 bps (integer, exact)
/// - Gateway fee 2% = 200 bps
/// - Avoids float comparison issues in cost configuration
///
/// ## Example
/// ```rust
/// use viraldeals_pricing::FeeRate;
///
/// let gst = FeeRate::from_bps(1800);
/// assert_eq!(gst.percentage(), 18.0);
///
/// let gateway = FeeRate::from_percentage(2.0);
/// assert_eq!(gateway.bps(), 200);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct FeeRate(u32);

impl FeeRate {
    /// Creates a fee rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        FeeRate(bps)
    }

    /// Creates a fee rate from a percentage (e.g., 18.0 for 18%).
    #[inline]
    pub fn from_percentage(percentage: f64) -> Self {
        FeeRate((percentage * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// MarkupRate Type
// =============================================================================

/// Represents a markup percentage in micro-percent (1% = 1_000_000).
///
/// ## Why Micro-Percent?
/// Base markups are whole percents, but category and competition
/// adjustments multiply them by two-decimal factors (×0.85, ×1.15).
/// At micro-percent scale every such product stays an exact integer:
///
/// ```text
/// 35% × 1.20 × 1.15  =  35_000_000 × 120/100 × 115/100  =  48_300_000
///                       (48.3%, no float drift anywhere)
/// ```
///
/// ## Example
/// ```rust
/// use viraldeals_pricing::{AdjustmentFactor, MarkupRate};
///
/// let base = MarkupRate::from_percent(35);
/// let adjusted = base.scaled_by(AdjustmentFactor::from_hundredths(120));
/// assert_eq!(adjusted.percent(), 42.0);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct MarkupRate(i64);

impl MarkupRate {
    /// Creates a markup rate from a whole percentage.
    #[inline]
    pub const fn from_percent(percent: i64) -> Self {
        MarkupRate(percent * 1_000_000)
    }

    /// Creates a markup rate from raw micro-percent units.
    #[inline]
    pub const fn from_micro_percent(micro_percent: i64) -> Self {
        MarkupRate(micro_percent)
    }

    /// Returns the rate in micro-percent units.
    #[inline]
    pub const fn micro_percent(&self) -> i64 {
        self.0
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub fn percent(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Multiplies the rate by an adjustment factor, rounding half-up
    /// in micro-percent units.
    ///
    /// With whole-percent bases and two-decimal factors the division is
    /// always exact; the rounding term only matters for unusual custom
    /// rates.
    pub fn scaled_by(&self, factor: AdjustmentFactor) -> MarkupRate {
        let scaled = (self.0 as i128 * factor.hundredths() as i128 + 50) / 100;
        MarkupRate(scaled as i64)
    }
}

impl fmt::Display for MarkupRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

// =============================================================================
// AdjustmentFactor Type
// =============================================================================

/// A markup multiplier in hundredths (100 = ×1.0, 85 = ×0.85).
///
/// Category demand, competition pressure, and the unique-value bonus
/// are all expressed as adjustment factors applied to the base markup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct AdjustmentFactor(u32);

impl AdjustmentFactor {
    /// Creates an adjustment factor from hundredths (115 = ×1.15).
    #[inline]
    pub const fn from_hundredths(hundredths: u32) -> Self {
        AdjustmentFactor(hundredths)
    }

    /// Returns the factor in hundredths.
    #[inline]
    pub const fn hundredths(&self) -> u32 {
        self.0
    }

    /// Returns the factor as a multiplier (e.g., 1.15).
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for AdjustmentFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.multiplier())
    }
}

// =============================================================================
// ProductCategory Enum
// =============================================================================

/// Product categories carried by the catalog, each with a demand-driven
/// markup adjustment.
///
/// ## Adjustment Factors
/// ```text
/// ┌──────────────┬────────┬──────────────────────────────────────────┐
/// │ Category     │ Factor │ Rationale                                │
/// ├──────────────┼────────┼──────────────────────────────────────────┤
/// │ electronics  │ ×0.85  │ Price-sensitive, heavy comparison        │
/// │ fashion      │ ×1.15  │ Style premium holds                      │
/// │ home_kitchen │ ×1.00  │ Baseline                                 │
/// │ beauty       │ ×1.20  │ Brand loyalty sustains margin            │
/// │ sports       │ ×0.90  │ Competitive, specialist rivals           │
/// │ books        │ ×0.70  │ Thin margins, MRP anchoring              │
/// │ toys         │ ×1.10  │ Gift purchases, less price-checking      │
/// │ generic      │ ×1.00  │ Unclassified products                    │
/// └──────────────┴────────┴──────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProductCategory {
    Electronics,
    Fashion,
    HomeKitchen,
    Beauty,
    Sports,
    Books,
    Toys,
    Generic,
}

impl ProductCategory {
    /// Returns the markup adjustment factor for this category.
    pub const fn adjustment_factor(&self) -> AdjustmentFactor {
        let hundredths = match self {
            ProductCategory::Electronics => 85,
            ProductCategory::Fashion => 115,
            ProductCategory::HomeKitchen => 100,
            ProductCategory::Beauty => 120,
            ProductCategory::Sports => 90,
            ProductCategory::Books => 70,
            ProductCategory::Toys => 110,
            ProductCategory::Generic => 100,
        };
        AdjustmentFactor::from_hundredths(hundredths)
    }

    /// Returns the wire-format name of this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "electronics",
            ProductCategory::Fashion => "fashion",
            ProductCategory::HomeKitchen => "home_kitchen",
            ProductCategory::Beauty => "beauty",
            ProductCategory::Sports => "sports",
            ProductCategory::Books => "books",
            ProductCategory::Toys => "toys",
            ProductCategory::Generic => "generic",
        }
    }
}

/// Default category is generic (no adjustment).
impl Default for ProductCategory {
    fn default() -> Self {
        ProductCategory::Generic
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(ProductCategory::Electronics),
            "fashion" => Ok(ProductCategory::Fashion),
            "home_kitchen" => Ok(ProductCategory::HomeKitchen),
            "beauty" => Ok(ProductCategory::Beauty),
            "sports" => Ok(ProductCategory::Sports),
            "books" => Ok(ProductCategory::Books),
            "toys" => Ok(ProductCategory::Toys),
            "generic" => Ok(ProductCategory::Generic),
            other => Err(PricingError::UnknownCategory(other.to_string())),
        }
    }
}

// =============================================================================
// CompetitionLevel Enum
// =============================================================================

/// Market competition pressure for a product, adjusting the markup
/// down as competition intensifies (and up when it is scarce).
///
/// ## Adjustment Factors
/// - `low` ×1.20, `medium` ×1.00, `high` ×0.85, `very_high` ×0.70
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl CompetitionLevel {
    /// Returns the markup adjustment factor for this competition level.
    pub const fn adjustment_factor(&self) -> AdjustmentFactor {
        let hundredths = match self {
            CompetitionLevel::Low => 120,
            CompetitionLevel::Medium => 100,
            CompetitionLevel::High => 85,
            CompetitionLevel::VeryHigh => 70,
        };
        AdjustmentFactor::from_hundredths(hundredths)
    }

    /// Returns the wire-format name of this competition level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CompetitionLevel::Low => "low",
            CompetitionLevel::Medium => "medium",
            CompetitionLevel::High => "high",
            CompetitionLevel::VeryHigh => "very_high",
        }
    }
}

/// Default competition level is medium (no adjustment).
impl Default for CompetitionLevel {
    fn default() -> Self {
        CompetitionLevel::Medium
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CompetitionLevel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(CompetitionLevel::Low),
            "medium" => Ok(CompetitionLevel::Medium),
            "high" => Ok(CompetitionLevel::High),
            "very_high" => Ok(CompetitionLevel::VeryHigh),
            other => Err(PricingError::UnknownCompetition(other.to_string())),
        }
    }
}

// =============================================================================
// CostFactors Configuration
// =============================================================================

/// The transaction cost rates an engine applies on top of the selling
/// price. Every field has the standard marketplace default, so a config
/// file only needs to name the rates it overrides.
///
/// ## Defaults
/// ```text
/// payment_gateway_fee   2%      platform_fee   3%
/// returns_buffer        3%      gst_rate       18%
/// packaging_cost        ₹10.00 flat per order
/// ```
///
/// ## Example
/// ```rust
/// use viraldeals_pricing::CostFactors;
///
/// // Partial config: unnamed rates keep their defaults
/// let factors: CostFactors = serde_json::from_str(r#"{"platform_fee": 250}"#).unwrap();
/// assert_eq!(factors.platform_fee.bps(), 250);
/// assert_eq!(factors.gst_rate.bps(), 1800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostFactors {
    /// Payment gateway fee rate (default 2%).
    #[serde(default = "default_payment_gateway_fee")]
    pub payment_gateway_fee: FeeRate,

    /// Marketplace platform fee rate (default 3%).
    #[serde(default = "default_platform_fee")]
    pub platform_fee: FeeRate,

    /// Flat packaging and handling cost per order (default ₹10).
    #[serde(default = "default_packaging_cost")]
    pub packaging_cost: Money,

    /// Buffer for returns and refunds (default 3%).
    #[serde(default = "default_returns_buffer")]
    pub returns_buffer: FeeRate,

    /// GST rate (default 18%).
    #[serde(default = "default_gst_rate")]
    pub gst_rate: FeeRate,
}

fn default_payment_gateway_fee() -> FeeRate {
    FeeRate::from_bps(200)
}

fn default_platform_fee() -> FeeRate {
    FeeRate::from_bps(300)
}

fn default_packaging_cost() -> Money {
    Money::from_rupees(10)
}

fn default_returns_buffer() -> FeeRate {
    FeeRate::from_bps(300)
}

fn default_gst_rate() -> FeeRate {
    FeeRate::from_bps(1800)
}

impl Default for CostFactors {
    fn default() -> Self {
        CostFactors {
            payment_gateway_fee: default_payment_gateway_fee(),
            platform_fee: default_platform_fee(),
            packaging_cost: default_packaging_cost(),
            returns_buffer: default_returns_buffer(),
            gst_rate: default_gst_rate(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
