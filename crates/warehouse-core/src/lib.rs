//! # warehouse-core: Pure Inventory Logic
//!
//! This crate is the **heart** of the warehouse manager. It holds the product
//! store and every business rule, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Warehouse Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console                                  │   │
//! │  │    Menu ──► read stdin ──► parse ints / dates / category choice │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain Rust calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ warehouse-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ warehouse │  │ validation│  │   shared  │  │   │
//! │  │   │  Product  │  │   store   │  │   rules   │  │  RwLock   │  │   │
//! │  │   │  Category │  │  queries  │  │  order    │  │  handle   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO STDIN • DETERMINISTIC                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and the closed `Category` enum
//! - [`warehouse`] - The in-memory store and its queries
//! - [`validation`] - Field rules, checked in a fixed order
//! - [`shared`] - Lock-protected handle for multi-threaded callers
//! - [`error`] - `CoreError` / `ValidationError`
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use warehouse_core::{Category, Warehouse};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
//! let mut warehouse = Warehouse::new();
//!
//! warehouse.verify_and_add(1, Some("Carrot"), Some(Category::Vegetable), 6, today, today).unwrap();
//! warehouse.verify_and_add(2, Some("Beet"), Some(Category::Vegetable), 9, today, today).unwrap();
//!
//! let vegetables = warehouse.filter_by_category(Category::Vegetable);
//! assert_eq!(vegetables[0].name, "Beet");
//!
//! let err = warehouse.verify_and_add(3, Some("Kale"), None, 11, today, today).unwrap_err();
//! assert_eq!(err.to_string(), "rating must be between 0 and 10");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod shared;
pub mod types;
pub mod validation;
pub mod warehouse;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use warehouse_core::Warehouse` instead of
// `use warehouse_core::warehouse::Warehouse`

pub use error::{CoreError, CoreResult, ValidationError};
pub use shared::SharedWarehouse;
pub use types::{Category, Product};
pub use warehouse::Warehouse;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest accepted product rating.
pub const MIN_RATING: i32 = 0;

/// Highest accepted product rating.
pub const MAX_RATING: i32 = 10;
