//! # Pricing Engine Module
//!
//! Composes the full pricing pipeline and owns the cost-factor
//! configuration.
//!
//! ## The Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  supplier_price                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  base_markup (tier table)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  adjusted_markup (category × competition × uniqueness, floor 15%)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  selling_price = supplier_price × (1 + adjusted_markup)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cost_breakdown (five components off selling_price)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  raw price = selling_price + total costs                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  final_price = psychological rounding (or identity if disabled)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  profit_margin = 100 × profit / final_price                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step is pure. The engine holds no mutable state, so a single
//! instance can be shared freely across threads.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::costs::CostBreakdown;
use crate::error::EngineResult;
use crate::markup;
use crate::money::Money;
use crate::rounding::psychological;
use crate::types::{CompetitionLevel, CostFactors, MarkupRate, ProductCategory};

// =============================================================================
// PricingInput
// =============================================================================

/// Fully-typed input for a single pricing calculation.
///
/// Every field except the supplier price has a neutral default, so the
/// common case is `PricingInput::new(price)` with selective overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingInput {
    /// Wholesale cost of one unit. Expected positive; non-positive
    /// values flow through the arithmetic unguarded.
    pub supplier_price: Money,

    /// Product category (default: generic, no adjustment).
    #[serde(default)]
    pub category: ProductCategory,

    /// Market competition level (default: medium, no adjustment).
    #[serde(default)]
    pub competition: CompetitionLevel,

    /// Whether the product has a unique selling point (default: false).
    #[serde(default)]
    pub has_unique_value: bool,

    /// Whether to round the final price to a charm price point
    /// (default: true).
    #[serde(default = "default_apply_psychological")]
    pub apply_psychological: bool,
}

fn default_apply_psychological() -> bool {
    true
}

impl PricingInput {
    /// Creates an input with all adjustments at their defaults.
    pub fn new(supplier_price: Money) -> Self {
        PricingInput {
            supplier_price,
            category: ProductCategory::default(),
            competition: CompetitionLevel::default(),
            has_unique_value: false,
            apply_psychological: true,
        }
    }
}

// =============================================================================
// ProductDescriptor
// =============================================================================

/// Loosely-typed product record as it arrives from catalog imports:
/// enum fields are raw strings, optional fields may be absent.
///
/// [`ProductDescriptor::resolve`] converts it to a [`PricingInput`] once,
/// at the boundary, so unknown strings fail before any math runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductDescriptor {
    /// Wholesale cost in paise.
    pub supplier_price: Money,

    /// Category name, e.g. `"beauty"` (default: generic).
    pub category: Option<String>,

    /// Competition level name, e.g. `"very_high"` (default: medium).
    pub competition: Option<String>,

    /// Unique selling point flag (default: false).
    pub has_unique_value: Option<bool>,
}

impl ProductDescriptor {
    /// Creates a descriptor with only the supplier price set.
    pub fn new(supplier_price: Money) -> Self {
        ProductDescriptor {
            supplier_price,
            category: None,
            competition: None,
            has_unique_value: None,
        }
    }

    /// Resolves the raw strings against the closed enumerations.
    ///
    /// Bulk pricing always rounds, so the resolved input has
    /// psychological rounding enabled.
    pub fn resolve(&self) -> EngineResult<PricingInput> {
        let category = match &self.category {
            Some(raw) => raw.parse()?,
            None => ProductCategory::default(),
        };
        let competition = match &self.competition {
            Some(raw) => raw.parse()?,
            None => CompetitionLevel::default(),
        };

        Ok(PricingInput {
            supplier_price: self.supplier_price,
            category,
            competition,
            has_unique_value: self.has_unique_value.unwrap_or(false),
            apply_psychological: true,
        })
    }
}

// =============================================================================
// PricingResult
// =============================================================================

/// The fully-attributed outcome of one pricing calculation.
///
/// Fields follow pipeline order, so reading the struct top to bottom
/// replays the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PricingResult {
    /// The wholesale cost this price was derived from.
    pub supplier_price: Money,
    /// Tier-table markup before adjustments.
    pub base_markup: MarkupRate,
    /// Markup after category, competition, and uniqueness adjustments.
    pub adjusted_markup: MarkupRate,
    /// Supplier price grown by the adjusted markup, before costs.
    pub selling_price: Money,
    /// The five itemized transaction costs.
    pub cost_breakdown: CostBreakdown,
    /// Price after costs and rounding. This is the listing price.
    pub final_price: Money,
    /// Profit as a percentage of the final price. Negative when costs
    /// exceed markup headroom; zero when the final price is not positive.
    pub profit_margin: f64,
}

impl PricingResult {
    /// Base markup as a percentage.
    pub fn base_markup_percent(&self) -> f64 {
        self.base_markup.percent()
    }

    /// Adjusted markup as a percentage.
    pub fn adjusted_markup_percent(&self) -> f64 {
        self.adjusted_markup.percent()
    }

    /// Sum of the five cost components.
    pub fn total_additional_costs(&self) -> Money {
        self.cost_breakdown.total()
    }

    /// Absolute profit: final price minus supplier cost minus all
    /// transaction costs.
    pub fn profit(&self) -> Money {
        self.final_price - self.supplier_price - self.cost_breakdown.total()
    }
}

// =============================================================================
// PricingEngine
// =============================================================================

/// The pricing engine: immutable cost-factor configuration plus the
/// calculation pipeline.
///
/// ## Example
/// ```rust
/// use viraldeals_pricing::{Money, PricingEngine, PricingInput};
///
/// let engine = PricingEngine::new();
/// let result = engine.calculate(&PricingInput::new(Money::from_rupees(150)));
///
/// assert_eq!(result.base_markup_percent(), 60.0);
/// assert_eq!(result.selling_price, Money::from_rupees(240));
/// assert_eq!(result.final_price, Money::from_rupees(399));
/// ```
#[derive(Debug, Clone)]
pub struct PricingEngine {
    cost_factors: CostFactors,
}

impl PricingEngine {
    /// Creates an engine with the standard marketplace cost factors.
    pub fn new() -> Self {
        PricingEngine {
            cost_factors: CostFactors::default(),
        }
    }

    /// Creates an engine with custom cost factors.
    pub fn with_cost_factors(cost_factors: CostFactors) -> Self {
        PricingEngine { cost_factors }
    }

    /// Returns the engine's cost-factor configuration.
    pub fn cost_factors(&self) -> &CostFactors {
        &self.cost_factors
    }

    /// Runs the full pipeline for one product.
    ///
    /// Total over all inputs: enumerations are closed types here, and
    /// non-positive supplier prices flow through mechanically rather
    /// than erroring.
    pub fn calculate(&self, input: &PricingInput) -> PricingResult {
        let base_markup = markup::base_markup(input.supplier_price);
        let adjusted_markup = markup::adjusted_markup(
            base_markup,
            input.category,
            input.competition,
            input.has_unique_value,
        );

        let selling_price = input.supplier_price.grow_by(adjusted_markup);
        let cost_breakdown = CostBreakdown::accrue(selling_price, &self.cost_factors);
        let raw_price = selling_price + cost_breakdown.total();

        let final_price = if input.apply_psychological {
            psychological(raw_price)
        } else {
            raw_price
        };

        let profit = final_price - input.supplier_price - cost_breakdown.total();
        let profit_margin = if final_price.is_positive() {
            profit.paise() as f64 / final_price.paise() as f64 * 100.0
        } else {
            0.0
        };

        debug!(
            supplier = %input.supplier_price,
            category = %input.category,
            competition = %input.competition,
            markup = %adjusted_markup,
            selling = %selling_price,
            final_price = %final_price,
            "Priced product"
        );

        PricingResult {
            supplier_price: input.supplier_price,
            base_markup,
            adjusted_markup,
            selling_price,
            cost_breakdown,
            final_price,
            profit_margin,
        }
    }

    /// Prices an ordered batch of product descriptors.
    ///
    /// Results come back in input order, one per descriptor, each equal
    /// to a single [`calculate`](PricingEngine::calculate) call with the
    /// same parameters. The first descriptor with an unknown category or
    /// competition string fails the whole batch; no partial results are
    /// returned.
    ///
    /// ## Example
    /// ```rust
    /// use viraldeals_pricing::{Money, PricingEngine, ProductDescriptor};
    ///
    /// let engine = PricingEngine::new();
    /// let batch = vec![
    ///     ProductDescriptor::new(Money::from_rupees(150)),
    ///     ProductDescriptor::new(Money::from_rupees(2500)),
    /// ];
    ///
    /// let results = engine.bulk_calculate(&batch).unwrap();
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results[0].final_price, Money::from_rupees(399));
    /// assert_eq!(results[1].final_price, Money::from_rupees(3499));
    /// ```
    pub fn bulk_calculate(&self, products: &[ProductDescriptor]) -> EngineResult<Vec<PricingResult>> {
        debug!(count = products.len(), "Pricing product batch");

        let mut results = Vec::with_capacity(products.len());
        for descriptor in products {
            let input = descriptor.resolve()?;
            results.push(self.calculate(&input));
        }
        Ok(results)
    }
}

/// Default engine uses the standard marketplace cost factors.
impl Default for PricingEngine {
    fn default() -> Self {
        PricingEngine::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;
    use crate::types::FeeRate;

    fn assert_margin(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.001,
            "margin {actual} differs from {expected}"
        );
    }

    #[test]
    fn test_scenario_everyday_product() {
        // ₹150 supplier, all defaults
        let engine = PricingEngine::new();
        let result = engine.calculate(&PricingInput::new(Money::from_rupees(150)));

        assert_eq!(result.base_markup, MarkupRate::from_percent(60));
        assert_eq!(result.adjusted_markup, MarkupRate::from_percent(60));
        assert_eq!(result.selling_price, Money::from_rupees(240));
        assert_eq!(result.total_additional_costs(), Money::from_paise(7240));
        assert_eq!(result.final_price, Money::from_rupees(399));
        assert_eq!(result.profit(), Money::from_paise(17_660));
        assert_margin(result.profit_margin, 44.2607);
    }

    #[test]
    fn test_scenario_premium_product() {
        // ₹2500 supplier: the ≥₹1000 rounding branch runs on the
        // post-cost raw price (₹3790), not the selling price (₹3000)
        let engine = PricingEngine::new();
        let result = engine.calculate(&PricingInput::new(Money::from_rupees(2500)));

        assert_eq!(result.base_markup, MarkupRate::from_percent(20));
        assert_eq!(result.selling_price, Money::from_rupees(3000));
        assert_eq!(result.total_additional_costs(), Money::from_paise(79_000));
        assert_eq!(result.final_price, Money::from_rupees(3499));
    }

    #[test]
    fn test_scenario_beauty_with_unique_value() {
        // ₹800 beauty product with a unique selling point:
        // 35% × 1.20 × 1.15 = 48.3% exactly
        let engine = PricingEngine::new();
        let mut input = PricingInput::new(Money::from_rupees(800));
        input.category = ProductCategory::Beauty;
        input.has_unique_value = true;

        let result = engine.calculate(&input);

        assert_eq!(result.adjusted_markup.micro_percent(), 48_300_000);
        assert_eq!(result.selling_price, Money::from_paise(118_640));
        assert_eq!(result.total_additional_costs(), Money::from_paise(31_846));
        assert_eq!(result.final_price, Money::from_rupees(1499));
        assert_margin(result.profit_margin, 25.3863);
    }

    #[test]
    fn test_negative_margin_is_a_valid_outcome() {
        // ₹1990 books under very high competition: the 15% floor still
        // cannot cover the costs, and the margin goes negative
        let engine = PricingEngine::new();
        let mut input = PricingInput::new(Money::from_rupees(1990));
        input.category = ProductCategory::Books;
        input.competition = CompetitionLevel::VeryHigh;

        let result = engine.calculate(&input);

        assert_eq!(result.adjusted_markup, MarkupRate::from_percent(15));
        assert_eq!(result.final_price, Money::from_rupees(2499));
        assert_eq!(result.profit(), Money::from_paise(-9602));
        assert!(result.profit_margin < 0.0);
        assert_margin(result.profit_margin, -3.8423);
        assert!(result.final_price.is_positive());
    }

    #[test]
    fn test_rounding_disabled_gives_exact_sum() {
        let engine = PricingEngine::new();
        let mut input = PricingInput::new(Money::from_rupees(150));
        input.apply_psychological = false;

        let result = engine.calculate(&input);

        assert_eq!(
            result.final_price,
            result.selling_price + result.total_additional_costs()
        );
        assert_eq!(result.final_price, Money::from_paise(31_240));
    }

    #[test]
    fn test_division_guard_forces_zero_margin() {
        // Out-of-domain negative supplier price drives the final price
        // negative; the margin is forced to zero instead of dividing
        let engine = PricingEngine::new();
        let mut input = PricingInput::new(Money::from_rupees(-100));
        input.apply_psychological = false;

        let result = engine.calculate(&input);

        assert!(result.final_price.is_negative());
        assert_eq!(result.profit_margin, 0.0);
    }

    #[test]
    fn test_custom_cost_factors_flow_through() {
        let factors = CostFactors {
            payment_gateway_fee: FeeRate::from_bps(0),
            platform_fee: FeeRate::from_bps(0),
            packaging_cost: Money::zero(),
            returns_buffer: FeeRate::from_bps(0),
            gst_rate: FeeRate::from_bps(0),
        };
        let engine = PricingEngine::with_cost_factors(factors);
        let mut input = PricingInput::new(Money::from_rupees(150));
        input.apply_psychological = false;

        let result = engine.calculate(&input);

        // With zero costs the final price is the bare selling price
        assert_eq!(result.final_price, Money::from_rupees(240));
        assert_eq!(result.total_additional_costs(), Money::zero());
        assert_margin(result.profit_margin, 37.5); // 90 / 240
    }

    #[test]
    fn test_descriptor_resolution() {
        let descriptor = ProductDescriptor {
            supplier_price: Money::from_rupees(800),
            category: Some("beauty".to_string()),
            competition: Some("very_high".to_string()),
            has_unique_value: Some(true),
        };

        let input = descriptor.resolve().unwrap();
        assert_eq!(input.category, ProductCategory::Beauty);
        assert_eq!(input.competition, CompetitionLevel::VeryHigh);
        assert!(input.has_unique_value);
        assert!(input.apply_psychological);
    }

    #[test]
    fn test_descriptor_defaults_when_fields_absent() {
        let input = ProductDescriptor::new(Money::from_rupees(150)).resolve().unwrap();
        assert_eq!(input.category, ProductCategory::Generic);
        assert_eq!(input.competition, CompetitionLevel::Medium);
        assert!(!input.has_unique_value);
    }

    #[test]
    fn test_bulk_preserves_order_and_matches_single_calls() {
        let engine = PricingEngine::new();
        let batch = vec![
            ProductDescriptor::new(Money::from_rupees(150)),
            ProductDescriptor {
                supplier_price: Money::from_rupees(800),
                category: Some("beauty".to_string()),
                competition: None,
                has_unique_value: Some(true),
            },
            ProductDescriptor::new(Money::from_rupees(2500)),
        ];

        let results = engine.bulk_calculate(&batch).unwrap();
        assert_eq!(results.len(), 3);

        // Supplier prices come back in input order
        assert_eq!(results[0].supplier_price, Money::from_rupees(150));
        assert_eq!(results[1].supplier_price, Money::from_rupees(800));
        assert_eq!(results[2].supplier_price, Money::from_rupees(2500));

        // Each batch entry equals the equivalent single calculation
        for (descriptor, bulk_result) in batch.iter().zip(&results) {
            let single = engine.calculate(&descriptor.resolve().unwrap());
            assert_eq!(&single, bulk_result);
        }
    }

    #[test]
    fn test_bulk_fails_fast_on_unknown_category() {
        let engine = PricingEngine::new();
        let batch = vec![
            ProductDescriptor::new(Money::from_rupees(150)),
            ProductDescriptor {
                supplier_price: Money::from_rupees(500),
                category: Some("luxury".to_string()),
                competition: None,
                has_unique_value: None,
            },
        ];

        let err = engine.bulk_calculate(&batch).unwrap_err();
        assert_eq!(err, PricingError::UnknownCategory("luxury".to_string()));
    }

    #[test]
    fn test_input_deserialization_defaults() {
        let input: PricingInput = serde_json::from_str(r#"{"supplier_price": 15000}"#).unwrap();

        assert_eq!(input.supplier_price, Money::from_rupees(150));
        assert_eq!(input.category, ProductCategory::Generic);
        assert_eq!(input.competition, CompetitionLevel::Medium);
        assert!(!input.has_unique_value);
        assert!(input.apply_psychological);
    }

    #[test]
    fn test_descriptor_batch_deserialization() {
        let json = r#"[
            {"supplier_price": 15000},
            {"supplier_price": 80000, "category": "beauty", "has_unique_value": true}
        ]"#;
        let batch: Vec<ProductDescriptor> = serde_json::from_str(json).unwrap();

        let results = PricingEngine::new().bulk_calculate(&batch).unwrap();
        assert_eq!(results[0].final_price, Money::from_rupees(399));
        assert_eq!(results[1].final_price, Money::from_rupees(1499));
    }

    #[test]
    fn test_adjusted_markup_never_below_floor() {
        let engine = PricingEngine::new();
        let categories = [
            ProductCategory::Electronics,
            ProductCategory::Books,
            ProductCategory::Generic,
        ];
        let levels = [
            CompetitionLevel::Medium,
            CompetitionLevel::High,
            CompetitionLevel::VeryHigh,
        ];

        for supplier in [45, 150, 500, 900, 1500, 2500] {
            for category in categories {
                for competition in levels {
                    let mut input = PricingInput::new(Money::from_rupees(supplier));
                    input.category = category;
                    input.competition = competition;

                    let result = engine.calculate(&input);
                    assert!(
                        result.adjusted_markup >= MarkupRate::from_percent(15),
                        "₹{supplier} {category} {competition}"
                    );
                }
            }
        }
    }
}
