//! # Transaction Costs Module
//!
//! Accrues the per-order costs a marketplace seller absorbs on top of the
//! marked-up selling price.
//!
//! ## The Five Components
//! ```text
//! ┌────────────────────┬─────────────┬──────────────────────────────────┐
//! │ Component          │ Default     │ Charged on                       │
//! ├────────────────────┼─────────────┼──────────────────────────────────┤
//! │ payment_gateway    │ 2%          │ selling price                    │
//! │ platform_fee       │ 3%          │ selling price                    │
//! │ packaging          │ ₹10 flat    │ per order                        │
//! │ returns_buffer     │ 3%          │ selling price                    │
//! │ gst                │ 18%         │ selling price                    │
//! └────────────────────┴─────────────┴──────────────────────────────────┘
//! ```
//!
//! Every percentage cost is charged on the pre-cost selling price, never
//! on a running total, so the components are independent and their order
//! does not matter.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::CostFactors;

// =============================================================================
// CostComponent Enum
// =============================================================================

/// Identifies one of the five transaction cost components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CostComponent {
    PaymentGateway,
    PlatformFee,
    Packaging,
    ReturnsBuffer,
    Gst,
}

impl CostComponent {
    /// All components in accrual order.
    pub const ALL: [CostComponent; 5] = [
        CostComponent::PaymentGateway,
        CostComponent::PlatformFee,
        CostComponent::Packaging,
        CostComponent::ReturnsBuffer,
        CostComponent::Gst,
    ];

    /// Returns the wire-format name of this component.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CostComponent::PaymentGateway => "payment_gateway",
            CostComponent::PlatformFee => "platform_fee",
            CostComponent::Packaging => "packaging",
            CostComponent::ReturnsBuffer => "returns_buffer",
            CostComponent::Gst => "gst",
        }
    }
}

impl fmt::Display for CostComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// CostBreakdown
// =============================================================================

/// Itemized transaction costs for a single order.
///
/// Field names match the wire format consumed by the listing tools, so
/// the struct serializes directly into the shape they expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CostBreakdown {
    /// Payment gateway charge.
    pub payment_gateway: Money,
    /// Marketplace platform commission.
    pub platform_fee: Money,
    /// Flat packaging and handling cost.
    pub packaging: Money,
    /// Reserve for returns and refunds.
    pub returns_buffer: Money,
    /// Goods and services tax.
    pub gst: Money,
}

impl CostBreakdown {
    /// Accrues all five cost components against a selling price.
    ///
    /// ## Example
    /// ```rust
    /// use viraldeals_pricing::{CostBreakdown, CostFactors, Money};
    ///
    /// let costs = CostBreakdown::accrue(Money::from_rupees(240), &CostFactors::default());
    /// assert_eq!(costs.payment_gateway, Money::from_paise(480)); // 2%
    /// assert_eq!(costs.gst, Money::from_paise(4320));            // 18%
    /// assert_eq!(costs.total(), Money::from_paise(7240));
    /// ```
    pub fn accrue(selling_price: Money, factors: &CostFactors) -> CostBreakdown {
        CostBreakdown {
            payment_gateway: selling_price.fee(factors.payment_gateway_fee),
            platform_fee: selling_price.fee(factors.platform_fee),
            packaging: factors.packaging_cost,
            returns_buffer: selling_price.fee(factors.returns_buffer),
            gst: selling_price.fee(factors.gst_rate),
        }
    }

    /// Sum of all five components.
    pub fn total(&self) -> Money {
        self.payment_gateway + self.platform_fee + self.packaging + self.returns_buffer + self.gst
    }

    /// Returns the amount for a single component.
    pub const fn get(&self, component: CostComponent) -> Money {
        match component {
            CostComponent::PaymentGateway => self.payment_gateway,
            CostComponent::PlatformFee => self.platform_fee,
            CostComponent::Packaging => self.packaging,
            CostComponent::ReturnsBuffer => self.returns_buffer,
            CostComponent::Gst => self.gst,
        }
    }

    /// Iterates the components in accrual order.
    pub fn iter(&self) -> impl Iterator<Item = (CostComponent, Money)> {
        let amounts = [
            (CostComponent::PaymentGateway, self.payment_gateway),
            (CostComponent::PlatformFee, self.platform_fee),
            (CostComponent::Packaging, self.packaging),
            (CostComponent::ReturnsBuffer, self.returns_buffer),
            (CostComponent::Gst, self.gst),
        ];
        amounts.into_iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
