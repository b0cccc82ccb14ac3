//! # Domain Types
//!
//! Core domain types of the warehouse.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌─────────────────┐                  │
//! │  │       Product        │          │    Category     │                  │
//! │  │  ──────────────────  │          │  ─────────────  │                  │
//! │  │  id (i64, > 0)       │   uses   │  Fruit          │                  │
//! │  │  name (non-empty)    │ ───────► │  Vegetable      │                  │
//! │  │  category            │          │  Meat           │                  │
//! │  │  rating (0..=10)     │          │  Fish           │                  │
//! │  │  created_date        │          │  Dairy          │                  │
//! │  │  last_modified_date  │          └─────────────────┘                  │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Semantics
//! A `Product` is never edited in place once it is in the store. A change is
//! a brand new record built with [`Product::revised`] and handed to
//! [`Warehouse::update`](crate::Warehouse::update).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Category
// =============================================================================

/// The closed set of product kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Fruit,
    Vegetable,
    Meat,
    Fish,
    Dairy,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Fruit,
        Category::Vegetable,
        Category::Meat,
        Category::Fish,
        Category::Dairy,
    ];

    /// Upper-case identifier (`FRUIT`, `VEGETABLE`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Fruit => "FRUIT",
            Category::Vegetable => "VEGETABLE",
            Category::Meat => "MEAT",
            Category::Fish => "FISH",
            Category::Dairy => "DAIRY",
        }
    }

    /// Maps a console menu number (1-5) to a category.
    ///
    /// ```rust
    /// use warehouse_core::Category;
    ///
    /// assert_eq!(Category::from_choice(2), Some(Category::Vegetable));
    /// assert_eq!(Category::from_choice(6), None);
    /// ```
    pub fn from_choice(choice: i64) -> Option<Category> {
        match choice {
            1 => Some(Category::Fruit),
            2 => Some(Category::Vegetable),
            3 => Some(Category::Meat),
            4 => Some(Category::Fish),
            5 => Some(Category::Dairy),
            _ => None,
        }
    }

    /// The identifiers as owned strings, used by the `NotAllowed` error.
    pub(crate) fn allowed_names() -> Vec<String> {
        Category::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::allowed_names(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// One inventory item.
///
/// Fields are public for construction and pattern matching. The store
/// re-validates every record it accepts, so a hand-built invalid `Product`
/// never ends up inside a [`Warehouse`](crate::Warehouse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Caller-supplied identifier, must be > 0.
    pub id: i64,

    /// Display name, must not be empty.
    pub name: String,

    pub category: Category,

    /// Rating in 0..=10.
    pub rating: i32,

    /// Day the product was registered. Never changes.
    pub created_date: NaiveDate,

    /// Day of the latest change to name, category or rating.
    pub last_modified_date: NaiveDate,
}

impl Product {
    /// Creates a product without validating it.
    ///
    /// Use [`Warehouse::verify_and_add`](crate::Warehouse::verify_and_add)
    /// when the values come from user input.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: Category,
        rating: i32,
        created_date: NaiveDate,
        last_modified_date: NaiveDate,
    ) -> Self {
        Product {
            id,
            name: name.into(),
            category,
            rating,
            created_date,
            last_modified_date,
        }
    }

    /// Builds the replacement record for a modification.
    ///
    /// Keeps `id` and `created_date`, stamps `last_modified_date` with `today`.
    pub fn revised(
        &self,
        name: impl Into<String>,
        category: Category,
        rating: i32,
        today: NaiveDate,
    ) -> Product {
        Product {
            id: self.id,
            name: name.into(),
            category,
            rating,
            created_date: self.created_date,
            last_modified_date: today,
        }
    }

    /// True once the product has been changed on a later day than it was created.
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.created_date != self.last_modified_date
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) rating {}/10, created {}, modified {}",
            self.id,
            self.name,
            self.category,
            self.rating,
            self.created_date,
            self.last_modified_date
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_category_from_choice() {
        let mapped: Vec<_> = (1..=5).filter_map(Category::from_choice).collect();
        assert_eq!(mapped, Category::ALL.to_vec());
        assert_eq!(Category::from_choice(0), None);
        assert_eq!(Category::from_choice(-3), None);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("FISH".parse::<Category>(), Ok(Category::Fish));
        assert_eq!(" dairy ".parse::<Category>(), Ok(Category::Dairy));

        let err = "BREAD".parse::<Category>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "category must be one of FRUIT, VEGETABLE, MEAT, FISH, DAIRY"
        );
    }

    #[test]
    fn test_category_serializes_as_identifier() {
        let json = serde_json::to_string(&Category::Vegetable).unwrap();
        assert_eq!(json, "\"VEGETABLE\"");

        let back: Category = serde_json::from_str("\"MEAT\"").unwrap();
        assert_eq!(back, Category::Meat);
    }

    #[test]
    fn test_revised_keeps_identity_and_creation() {
        let original = Product::new(4, "Salmon", Category::Fish, 6, date(2024, 1, 10), date(2024, 1, 10));
        assert!(!original.is_modified());

        let revised = original.revised("Smoked Salmon", Category::Fish, 8, date(2024, 2, 1));
        assert_eq!(revised.id, 4);
        assert_eq!(revised.created_date, date(2024, 1, 10));
        assert_eq!(revised.last_modified_date, date(2024, 2, 1));
        assert_eq!(revised.name, "Smoked Salmon");
        assert!(revised.is_modified());

        // Original value is untouched.
        assert_eq!(original.name, "Salmon");
    }

    #[test]
    fn test_product_display() {
        let product = Product::new(1, "Banana", Category::Fruit, 9, date(2024, 3, 1), date(2024, 3, 2));
        assert_eq!(
            product.to_string(),
            "#1 Banana (FRUIT) rating 9/10, created 2024-03-01, modified 2024-03-02"
        );
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::new(2, "Milk", Category::Dairy, 5, date(2024, 5, 6), date(2024, 5, 6));
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["category"], "DAIRY");
        assert_eq!(value["created_date"], "2024-05-06");
    }
}
