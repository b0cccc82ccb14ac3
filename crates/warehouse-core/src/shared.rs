//! # Shared Warehouse
//!
//! A cloneable, thread-safe handle over one [`Warehouse`].
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Arc<RwLock<Warehouse>>                                 │
//! │                                                                         │
//! │  add / verify_and_add / update ──► write lock (one writer at a time)   │
//! │                                                                         │
//! │  find_by_id / list / filters / sort ──► read lock, returns a snapshot  │
//! │                                                                         │
//! │  A reader never sees half of a write: every store operation runs       │
//! │  entirely under the lock it took.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The plain `Warehouse` is enough for the single-threaded console. Use this
//! handle only when several threads need the same store.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use crate::error::CoreResult;
use crate::types::{Category, Product};
use crate::warehouse::Warehouse;

/// Thread-safe handle to a warehouse. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedWarehouse {
    inner: Arc<RwLock<Warehouse>>,
}

impl SharedWarehouse {
    /// Wraps an existing warehouse.
    pub fn new(warehouse: Warehouse) -> Self {
        SharedWarehouse {
            inner: Arc::new(RwLock::new(warehouse)),
        }
    }

    // A panicking writer cannot leave the Vec half-updated, so a poisoned
    // lock still guards a consistent store.
    fn read(&self) -> RwLockReadGuard<'_, Warehouse> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Warehouse> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, product: Product) -> CoreResult<()> {
        self.write().add(product)
    }

    pub fn verify_and_add(
        &self,
        id: i64,
        name: Option<&str>,
        category: Option<Category>,
        rating: i32,
        created_date: NaiveDate,
        last_modified_date: NaiveDate,
    ) -> CoreResult<()> {
        self.write()
            .verify_and_add(id, name, category, rating, created_date, last_modified_date)
    }

    pub fn update(&self, updated: Product) -> CoreResult<()> {
        self.write().update(updated)
    }

    pub fn find_by_id(&self, id: i64) -> CoreResult<Product> {
        self.read().find_by_id(id)
    }

    pub fn list(&self) -> Vec<Product> {
        self.read().list()
    }

    pub fn filter_by_category(&self, category: Category) -> Vec<Product> {
        self.read().filter_by_category(category)
    }

    pub fn filter_by_min_created_date(&self, date: NaiveDate) -> Vec<Product> {
        self.read().filter_by_min_created_date(date)
    }

    pub fn find_modified(&self) -> Vec<Product> {
        self.read().find_modified()
    }

    pub fn sort_by_rating_descending(&self) -> Vec<Product> {
        self.read().sort_by_rating_descending()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl From<Warehouse> for SharedWarehouse {
    fn from(warehouse: Warehouse) -> Self {
        SharedWarehouse::new(warehouse)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
