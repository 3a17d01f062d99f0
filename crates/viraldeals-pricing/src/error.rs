//! # Error Module
//!
//! Defines error types for the pricing engine.
//!
//! ## Design Philosophy
//! - Errors carry the offending value plus the accepted alternatives, so a
//!   failed bulk run can be fixed from the message alone
//! - Every error is a value the caller can match on; nothing panics
//! - `thiserror` derives the Display implementations

use thiserror::Error;

/// Errors that can occur while resolving pricing inputs.
///
/// Pricing math itself is total: any supplier price produces a result.
/// Errors only arise at the boundary, where raw catalog strings are
/// resolved into typed inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Category string did not match any known product category.
    #[error(
        "unknown product category '{0}' (expected one of: electronics, fashion, \
         home_kitchen, beauty, sports, books, toys, generic)"
    )]
    UnknownCategory(String),

    /// Competition string did not match any known competition level.
    #[error("unknown competition level '{0}' (expected one of: low, medium, high, very_high)")]
    UnknownCompetition(String),
}

/// Result type alias for pricing operations.
pub type EngineResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = PricingError::UnknownCategory("luxury".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'luxury'"));
        assert!(msg.contains("home_kitchen"));

        let err = PricingError::UnknownCompetition("none".to_string());
        assert!(err.to_string().contains("very_high"));
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(
            PricingError::UnknownCategory("x".to_string()),
            PricingError::UnknownCategory("x".to_string())
        );
        assert_ne!(
            PricingError::UnknownCategory("x".to_string()),
            PricingError::UnknownCompetition("x".to_string())
        );
    }
}
