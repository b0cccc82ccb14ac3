//! # Demo Data
//!
//! Products the console starts with when `WAREHOUSE_SEED_DEMO` is on, so the
//! queries have something to show right away.

use chrono::NaiveDate;
use tracing::debug;
use warehouse_core::{Category, CoreResult, Product, Warehouse};

/// (id, name, category, rating)
const DEMO_PRODUCTS: &[(i64, &str, Category, i32)] = &[
    (1, "Banana", Category::Fruit, 9),
    (2, "Apple", Category::Fruit, 7),
    (3, "Steak", Category::Meat, 5),
];

/// Builds the demo products, all created and last modified on `today`.
pub fn demo_products(today: NaiveDate) -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(|&(id, name, category, rating)| Product::new(id, name, category, rating, today, today))
        .collect()
}

/// Adds the demo products to `warehouse`.
pub fn seed_demo(warehouse: &mut Warehouse, today: NaiveDate) -> CoreResult<()> {
    for product in demo_products(today) {
        warehouse.add(product)?;
    }

    debug!(count = DEMO_PRODUCTS.len(), "Seeded demo products");
    Ok(())
}
