//! # Warehouse Console
//!
//! Entry point. All logic lives in the library so it can be tested.

fn main() -> anyhow::Result<()> {
    warehouse_console::run()
}
