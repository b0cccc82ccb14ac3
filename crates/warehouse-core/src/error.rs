//! # Error Types
//!
//! Domain-specific error types for warehouse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  warehouse-core errors (this file)                                      │
//! │  ├── CoreError        - What store operations return                    │
//! │  │   ├── InvalidArgument(ValidationError)                               │
//! │  │   └── NotFound { id }                                                │
//! │  └── ValidationError  - One variant per field rule                      │
//! │                                                                         │
//! │  console errors (apps/console)                                          │
//! │  └── ConfigError      - Bad environment values                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → console prints "Error: <msg>"      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text IS the user-facing message
//! 3. Errors are enum variants, never String
//! 4. Nothing here is fatal: every error is an expected outcome of bad input

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by [`Warehouse`](crate::Warehouse) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A field of an add/verify/update call broke a business rule.
    ///
    /// Displays the inner validation message verbatim, e.g.
    /// `rating must be between 0 and 10`.
    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),

    /// Lookup by id found no product.
    #[error("product with id {id} not found")]
    NotFound { id: i64 },
}

impl CoreError {
    /// Returns true for the `InvalidArgument` kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoreError::InvalidArgument(_))
    }

    /// Returns true for the `NotFound` kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field validation errors.
///
/// Checked in a fixed order (id → rating → name → category), so a row with
/// several bad fields always reports the same single message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be strictly greater than zero.
    #[error("{field} must be a positive number")]
    MustBePositive { field: String },

    /// Numeric value is outside an inclusive range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of {}", .allowed.join(", "))]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "id".to_string(),
        };
        assert_eq!(err.to_string(), "id must be a positive number");

        let err = ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "rating must be between 0 and 10");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NotAllowed {
            field: "category".to_string(),
            allowed: vec!["FRUIT".to_string(), "MEAT".to_string()],
        };
        assert_eq!(err.to_string(), "category must be one of FRUIT, MEAT");
    }

    #[test]
    fn test_invalid_argument_is_transparent() {
        let err: CoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_not_found_message() {
        let err = CoreError::NotFound { id: 42 };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "product with id 42 not found");
    }
}
