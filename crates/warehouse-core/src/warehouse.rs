//! # Inventory Store
//!
//! The `Warehouse` owns every product and is the only way to change them.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Warehouse (Vec<Product>, insertion order)            │
//! │                                                                         │
//! │  Writes (&mut self)                 Reads (&self, return snapshots)     │
//! │  ──────────────────                 ───────────────────────────────     │
//! │  add(product)                       find_by_id(id)                      │
//! │  verify_and_add(fields..)           list()                              │
//! │  update(product)                    filter_by_category(cat)             │
//! │                                     filter_by_min_created_date(date)    │
//! │                                     find_modified()                     │
//! │                                     sort_by_rating_descending()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Every read returns an owned `Vec<Product>` (or `Product`). Callers can sort,
//! truncate or mutate what they get back; the store never sees it.
//!
//! ## Update Moves The Record
//! `update` removes every product with the same id and appends the new
//! record, so an updated product shows up LAST in `list()`. Callers relying
//! on positions must not assume an in-place edit.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, Product};
use crate::validation::{validate_fields, validate_product};

/// In-memory product store.
///
/// ## Usage
/// ```rust
/// use chrono::NaiveDate;
/// use warehouse_core::{Category, Warehouse};
///
/// let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let mut warehouse = Warehouse::new();
///
/// warehouse
///     .verify_and_add(7, Some("Carrot"), Some(Category::Vegetable), 8, today, today)
///     .unwrap();
///
/// assert_eq!(warehouse.find_by_id(7).unwrap().name, "Carrot");
/// assert!(warehouse.find_by_id(8).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Warehouse {
    products: Vec<Product>,
}

impl Warehouse {
    /// Creates an empty warehouse.
    pub fn new() -> Self {
        Warehouse {
            products: Vec::new(),
        }
    }

    /// Number of products currently held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Appends a complete product record.
    ///
    /// No id-uniqueness check. The record is re-validated so that the store
    /// invariant (id > 0, rating 0..=10, non-empty name) always holds.
    ///
    /// ## Errors
    /// * `CoreError::InvalidArgument` - the record breaks a field rule; the
    ///   store is unchanged
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        validate_product(&product)?;

        debug!(id = product.id, name = %product.name, "Adding product");
        self.products.push(product);
        Ok(())
    }

    /// Validates raw field values and appends the resulting product.
    ///
    /// ## Validation Order
    /// id → rating → name → category. The first failure is returned and the
    /// remaining fields are not looked at.
    ///
    /// ## Arguments
    /// * `name` - `None` models a missing name
    /// * `category` - `None` models a missing or unrecognized category
    pub fn verify_and_add(
        &mut self,
        id: i64,
        name: Option<&str>,
        category: Option<Category>,
        rating: i32,
        created_date: NaiveDate,
        last_modified_date: NaiveDate,
    ) -> CoreResult<()> {
        let (name, category) = validate_fields(id, name, category, rating)?;

        self.add(Product::new(
            id,
            name,
            category,
            rating,
            created_date,
            last_modified_date,
        ))
    }

    /// Replaces every product with the same id by `updated`, appended last.
    ///
    /// Acts as an upsert: with no existing match the product is simply
    /// appended.
    ///
    /// ## Errors
    /// * `CoreError::InvalidArgument` - `updated` breaks a field rule; nothing
    ///   is removed
    pub fn update(&mut self, updated: Product) -> CoreResult<()> {
        validate_product(&updated)?;

        let before = self.products.len();
        self.products.retain(|p| p.id != updated.id);
        debug!(
            id = updated.id,
            replaced = before - self.products.len(),
            "Updating product"
        );

        self.products.push(updated);
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the first product with the given id.
    ///
    /// ## Errors
    /// * `CoreError::NotFound` - no product has this id
    pub fn find_by_id(&self, id: i64) -> CoreResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { id })
    }

    /// Snapshot of all products in store order.
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Products of one category, sorted by name (case-sensitive, ascending).
    ///
    /// Products with equal names keep their store order.
    pub fn filter_by_category(&self, category: Category) -> Vec<Product> {
        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(category = %category, count = matches.len(), "Filtered by category");
        matches
    }

    /// Products created on or after `date`, in store order.
    pub fn filter_by_min_created_date(&self, date: NaiveDate) -> Vec<Product> {
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.created_date >= date)
            .cloned()
            .collect();

        debug!(date = %date, count = matches.len(), "Filtered by created date");
        matches
    }

    /// Products whose modification date differs from their creation date.
    pub fn find_modified(&self) -> Vec<Product> {
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_modified())
            .cloned()
            .collect();

        debug!(count = matches.len(), "Found modified products");
        matches
    }

    /// All products, highest rating first.
    ///
    /// Stable: equal ratings keep their store order.
    pub fn sort_by_rating_descending(&self) -> Vec<Product> {
        let mut sorted = self.products.clone();
        sorted.sort_by(|a, b| b.rating.cmp(&a.rating));

        debug!(count = sorted.len(), "Sorted by rating");
        sorted
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
