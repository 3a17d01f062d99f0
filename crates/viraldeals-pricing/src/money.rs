//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a pricing engine that feeds real listings:                          │
//! │    ₹240.00 × 3% = ₹7.200000000000001 → drifts through the pipeline     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    24000 paise × 300 bps = 720 paise, exactly                          │
//! │    Every rounding point is explicit and documented                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use viraldeals_pricing::{FeeRate, Money};
//!
//! // Create from paise (preferred) or whole rupees
//! let price = Money::from_paise(1099); // ₹10.99
//! let cost = Money::from_rupees(150);  // ₹150.00
//!
//! // Arithmetic operations
//! let total = price + Money::from_paise(500); // ₹15.99
//!
//! // Percentage fees round half-up to the paisa
//! let gst = cost.fee(FeeRate::from_bps(1800)); // 18% of ₹150 = ₹27.00
//! assert_eq!(gst, Money::from_rupees(27));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::{FeeRate, MarkupRate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise, ₹1 = 100).
///
/// ## Design Decisions
/// - **i64 (signed)**: the engine does not validate its numeric domain
///   (non-positive supplier prices flow through mechanically), so negative
///   intermediate values must be representable
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, serializes as a bare integer
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  supplier_price ──► selling_price ──► + costs ──► rounded final_price  │
/// │                                                                         │
/// │  EVERY monetary value in the pipeline flows through this type          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use viraldeals_pricing::Money;
    ///
    /// let price = Money::from_paise(1099); // Represents ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from a whole number of rupees.
    ///
    /// Supplier prices and the fixed packaging cost are quoted in whole
    /// rupees everywhere the engine is used, so this is the common entry.
    ///
    /// ## Example
    /// ```rust
    /// use viraldeals_pricing::Money;
    ///
    /// let price = Money::from_rupees(150);
    /// assert_eq!(price.paise(), 15_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use viraldeals_pricing::Money;
    ///
    /// assert_eq!(Money::from_paise(1099).rupees(), 10);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage fee and returns the fee amount, rounded
    /// half-up to the paisa.
    ///
    /// ## Implementation
    /// Integer math in i128: `(paise × bps + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use viraldeals_pricing::{FeeRate, Money};
    ///
    /// let selling = Money::from_rupees(240);
    /// let gateway = selling.fee(FeeRate::from_bps(200)); // 2%
    /// assert_eq!(gateway, Money::from_paise(480)); // ₹4.80
    ///
    /// // ₹10.00 × 8.25% = ₹0.825 → rounds to ₹0.83
    /// let odd = Money::from_paise(1000).fee(FeeRate::from_bps(825));
    /// assert_eq!(odd.paise(), 83);
    /// ```
    pub fn fee(&self, rate: FeeRate) -> Money {
        // i128 prevents overflow on large amounts
        let fee_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(fee_paise as i64)
    }

    /// Grows the amount by a markup fraction: `amount × (1 + markup)`,
    /// rounded half-up to the paisa.
    ///
    /// This is the selling-price step: supplier cost grown by the
    /// adjusted markup.
    ///
    /// ## Example
    /// ```rust
    /// use viraldeals_pricing::{MarkupRate, Money};
    ///
    /// let supplier = Money::from_rupees(150);
    /// let selling = supplier.grow_by(MarkupRate::from_percent(60));
    /// assert_eq!(selling, Money::from_rupees(240));
    /// ```
    pub fn grow_by(&self, markup: MarkupRate) -> Money {
        // Micro-percent units: 100% = 100_000_000
        const SCALE: i128 = 100_000_000;
        let grown = (self.0 as i128 * (SCALE + markup.micro_percent() as i128) + SCALE / 2) / SCALE;
        Money::from_paise(grown as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use frontend formatting for actual UI
/// display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
