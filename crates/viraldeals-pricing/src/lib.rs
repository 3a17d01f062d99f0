//! # ViralDeals Pricing Engine
//!
//! Deterministic pricing for resold marketplace products: supplier cost in,
//! listing-ready price out, with every rupee of cost attributed.
//!
//! ## Golden Rule
//! **NO I/O ALLOWED**: this crate contains pure business logic only.
//! No file access, no network, no database, no system clock. Everything
//! is a function from inputs to values, which is what keeps pricing
//! reproducible across the importer, the listing tools, and the books.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        viraldeals-pricing                               │
//! │                                                                         │
//! │   money ────► types ────► markup ──┐                                   │
//! │     │           │                  ▼                                   │
//! │     │           └────► costs ──► engine ◄── rounding                   │
//! │     │                              │                                   │
//! │     └── error ◄────────────────────┘                                   │
//! │                                                                         │
//! │   money     integer paise, fee and growth arithmetic                   │
//! │   types     rates, categories, competition, cost factors               │
//! │   markup    tier table and adjustment composition                      │
//! │   costs     five-component transaction cost accrual                    │
//! │   rounding  psychological charm pricing                                │
//! │   engine    pipeline assembly, bulk dispatch                           │
//! │   error     resolution errors at the string boundary                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//! ```rust
//! use viraldeals_pricing::{Money, PricingEngine, PricingInput, ProductCategory};
//!
//! let engine = PricingEngine::new();
//!
//! // A ₹150 generic product under medium competition
//! let result = engine.calculate(&PricingInput::new(Money::from_rupees(150)));
//! assert_eq!(result.final_price, Money::from_rupees(399));
//!
//! // Same product, but beauty category with a unique selling point
//! let mut input = PricingInput::new(Money::from_rupees(800));
//! input.category = ProductCategory::Beauty;
//! input.has_unique_value = true;
//! let result = engine.calculate(&input);
//! assert_eq!(result.adjusted_markup_percent(), 48.3);
//! assert_eq!(result.final_price, Money::from_rupees(1499));
//! ```

pub mod costs;
pub mod engine;
pub mod error;
pub mod markup;
pub mod money;
pub mod rounding;
pub mod types;

pub use costs::{CostBreakdown, CostComponent};
pub use engine::{PricingEngine, PricingInput, PricingResult, ProductDescriptor};
pub use error::{EngineResult, PricingError};
pub use markup::{adjusted_markup, base_markup, MARKUP_FLOOR, UNIQUE_VALUE_BONUS};
pub use money::Money;
pub use rounding::psychological;
pub use types::{
    AdjustmentFactor, CompetitionLevel, CostFactors, FeeRate, MarkupRate, ProductCategory,
};
