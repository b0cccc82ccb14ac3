//! # Validation Module
//!
//! Field rules for products entering the store.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fail-fast field checks                             │
//! │                                                                         │
//! │  verify_and_add(id, name, category, rating, created, modified)          │
//! │       │                                                                 │
//! │       ├── 1. id <= 0?            → "id must be a positive number"       │
//! │       │                                                                 │
//! │       ├── 2. rating ∉ 0..=10?    → "rating must be between 0 and 10"    │
//! │       │                                                                 │
//! │       ├── 3. name empty/absent?  → "name is required"                   │
//! │       │                                                                 │
//! │       ├── 4. category absent?    → "category must be one of ..."        │
//! │       │                                                                 │
//! │       └── OK → Product appended                                         │
//! │                                                                         │
//! │  The first failing rule wins; later fields are not inspected.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use warehouse_core::validation::{validate_id, validate_rating};
//!
//! assert!(validate_id(7).is_ok());
//! assert!(validate_rating(11).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Category, Product};
use crate::{MAX_RATING, MIN_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Single-field Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a rating.
///
/// ## Rules
/// - Must be between MIN_RATING (0) and MAX_RATING (10), both inclusive
///
/// ## Example
/// ```rust
/// use warehouse_core::validation::validate_rating;
///
/// assert!(validate_rating(0).is_ok());
/// assert!(validate_rating(10).is_ok());
/// assert!(validate_rating(-1).is_err());
/// ```
pub fn validate_rating(rating: i32) -> ValidationResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: i64::from(MIN_RATING),
            max: i64::from(MAX_RATING),
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must be present and not empty
///
/// Whitespace is not trimmed: `" "` is a (strange but) non-empty name.
pub fn validate_name(name: Option<&str>) -> ValidationResult<&str> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ValidationError::Required {
            field: "name".to_string(),
        }),
    }
}

/// Validates that a category was supplied.
pub fn validate_category(category: Option<Category>) -> ValidationResult<Category> {
    category.ok_or_else(|| ValidationError::NotAllowed {
        field: "category".to_string(),
        allowed: Category::allowed_names(),
    })
}

// =============================================================================
// Record Validators
// =============================================================================

/// Runs every field rule in the fixed order id → rating → name → category.
///
/// Returns the checked name and category so callers can build a `Product`
/// without unwrapping.
pub fn validate_fields<'a>(
    id: i64,
    name: Option<&'a str>,
    category: Option<Category>,
    rating: i32,
) -> ValidationResult<(&'a str, Category)> {
    validate_id(id)?;
    validate_rating(rating)?;
    let name = validate_name(name)?;
    let category = validate_category(category)?;
    Ok((name, category))
}

/// Re-checks a complete product record with the same rules and order.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_fields(
        product.id,
        Some(product.name.as_str()),
        Some(product.category),
        product.rating,
    )
    .map(|_| ())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(i64::MAX).is_ok());

        assert!(validate_id(0).is_err());
        assert!(validate_id(-5).is_err());
    }

    #[test]
    fn test_validate_rating() {
        for rating in 0..=10 {
            assert!(validate_rating(rating).is_ok(), "rating {rating} should pass");
        }
        assert!(validate_rating(-1).is_err());
        assert!(validate_rating(11).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(Some("Tomato")), Ok("Tomato"));
        assert!(validate_name(Some("")).is_err());
        assert!(validate_name(None).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert_eq!(validate_category(Some(Category::Meat)), Ok(Category::Meat));
        assert!(matches!(
            validate_category(None),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_first_violation_wins() {
        // Every field is wrong: id is reported.
        let err = validate_fields(0, None, None, 99).unwrap_err();
        assert_eq!(err.to_string(), "id must be a positive number");

        // id fixed: rating is next.
        let err = validate_fields(1, None, None, 99).unwrap_err();
        assert_eq!(err.to_string(), "rating must be between 0 and 10");

        // rating fixed: name is next.
        let err = validate_fields(1, Some(""), None, 5).unwrap_err();
        assert_eq!(err.to_string(), "name is required");

        // Only the category is missing.
        let err = validate_fields(1, Some("Cod"), None, 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "category must be one of FRUIT, VEGETABLE, MEAT, FISH, DAIRY"
        );
    }

    #[test]
    fn test_validate_product() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let ok = Product::new(3, "Cod", Category::Fish, 4, day, day);
        assert!(validate_product(&ok).is_ok());

        let bad = Product { rating: 12, ..ok.clone() };
        assert!(matches!(
            validate_product(&bad),
            Err(ValidationError::OutOfRange { .. })
        ));

        let nameless = Product { name: String::new(), ..ok };
        assert!(matches!(
            validate_product(&nameless),
            Err(ValidationError::Required { .. })
        ));
    }
}
