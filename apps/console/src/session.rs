//! # Menu Session
//!
//! The interactive loop: one menu choice per iteration, one store call per
//! action.
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Add product                  5. Show modified products              │
//! │  2. Find product by id           6. Show products by rating             │
//! │  3. Show products by category    7. Modify product                      │
//! │  4. Show products from a date    8. Show all products                   │
//! │  0. Exit                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store errors are printed and the loop goes on. Parse errors (not a number,
//! bad date) abort the current action only. End of input ends the session.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info};
use warehouse_core::{CoreError, Product, Warehouse};

use crate::input::{InputError, Terminal};

/// What the loop does after an action.
enum Flow {
    Continue,
    Exit,
}

/// One interactive run over a warehouse.
pub struct Session<R, W> {
    warehouse: Warehouse,
    term: Terminal<R, W>,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session. `today` stamps new and modified products.
    pub fn new(warehouse: Warehouse, input: R, output: W, today: NaiveDate) -> Self {
        Session {
            warehouse,
            term: Terminal::new(input, output),
            today,
        }
    }

    /// Hands the store back once the session is over.
    pub fn into_warehouse(self) -> Warehouse {
        self.warehouse
    }

    /// Runs the menu until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        info!(products = self.warehouse.len(), today = %self.today, "Session started");

        loop {
            self.print_menu()?;

            let outcome = self
                .term
                .prompt_number::<i64>("Choice: ")
                .and_then(|choice| self.dispatch(choice));

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(InputError::Closed) => break,
                Err(InputError::Io(e)) => return Err(e),
                Err(other) => {
                    debug!(error = ?other, "Rejected console input");
                    self.term.say(&other)?;
                }
            }
        }

        info!(products = self.warehouse.len(), "Session finished");
        self.term.say("Goodbye.")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.term.say("")?;
        self.term.say("=== Warehouse ===")?;
        self.term.say("1. Add product")?;
        self.term.say("2. Find product by id")?;
        self.term.say("3. Show products by category")?;
        self.term.say("4. Show products from a date")?;
        self.term.say("5. Show modified products")?;
        self.term.say("6. Show products by rating")?;
        self.term.say("7. Modify product")?;
        self.term.say("8. Show all products")?;
        self.term.say("0. Exit")
    }

    fn dispatch(&mut self, choice: i64) -> Result<Flow, InputError> {
        debug!(choice, "Menu choice");

        match choice {
            1 => self.add_product()?,
            2 => self.find_product()?,
            3 => self.show_by_category()?,
            4 => self.show_from_date()?,
            5 => self.show_modified()?,
            6 => self.show_by_rating()?,
            7 => self.modify_product()?,
            8 => self.show_all()?,
            0 => return Ok(Flow::Exit),
            _ => self.term.say("Invalid choice, try again.")?,
        }

        Ok(Flow::Continue)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_product(&mut self) -> Result<(), InputError> {
        let id: i64 = self.term.prompt_number("Enter product id (whole number): ")?;
        let name = self.term.prompt("Enter product name: ")?;

        let Some(category) = self.term.prompt_category("Choose category")? else {
            self.term.say("Invalid choice, try again.")?;
            return Ok(());
        };

        let rating: i32 = self.term.prompt_number("Enter rating (0-10): ")?;

        match self.warehouse.verify_and_add(
            id,
            Some(name.as_str()),
            Some(category),
            rating,
            self.today,
            self.today,
        ) {
            Ok(()) => self.term.say("Product added.")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn find_product(&mut self) -> Result<(), InputError> {
        let id: i64 = self.term.prompt_number("Enter product id (whole number): ")?;

        match self.warehouse.find_by_id(id) {
            Ok(product) => self.term.say(format!("Found: {product}"))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn show_by_category(&mut self) -> Result<(), InputError> {
        let Some(category) = self.term.prompt_category("Choose category")? else {
            self.term.say("Invalid choice, try again.")?;
            return Ok(());
        };

        let products = self.warehouse.filter_by_category(category);
        self.print_products(
            &format!("Products in category {category}:"),
            "No products found in the selected category.",
            &products,
        )?;
        Ok(())
    }

    fn show_from_date(&mut self) -> Result<(), InputError> {
        let date = self.term.prompt_date("Enter date (YYYY-MM-DD): ")?;

        let products = self.warehouse.filter_by_min_created_date(date);
        self.print_products(
            &format!("Products from {date}:"),
            &format!("No products found from {date}."),
            &products,
        )?;
        Ok(())
    }

    fn show_modified(&mut self) -> Result<(), InputError> {
        let products = self.warehouse.find_modified();
        self.print_products("Modified products:", "No modified products found.", &products)?;
        Ok(())
    }

    fn show_by_rating(&mut self) -> Result<(), InputError> {
        let products = self.warehouse.sort_by_rating_descending();
        self.print_products("Products by rating:", "The warehouse is empty.", &products)?;
        Ok(())
    }

    fn show_all(&mut self) -> Result<(), InputError> {
        let products = self.warehouse.list();
        self.print_products("All products:", "The warehouse is empty.", &products)?;
        Ok(())
    }

    /// Asks field by field what to change, then replaces the record.
    fn modify_product(&mut self) -> Result<(), InputError> {
        let id: i64 = self.term.prompt_number("Enter product id (whole number): ")?;

        let product = match self.warehouse.find_by_id(id) {
            Ok(product) => product,
            Err(e) => {
                self.report(&e)?;
                return Ok(());
            }
        };
        self.term.say(format!("Found: {product}"))?;

        let mut name = product.name.clone();
        if self.term.prompt_yes("Change name?")? {
            name = self.term.prompt("New name: ")?;
        }

        let mut category = product.category;
        if self.term.prompt_yes("Change category?")? {
            match self.term.prompt_category("Choose new category")? {
                Some(chosen) => category = chosen,
                None => self.term.say("Invalid choice, category unchanged.")?,
            }
        }

        let mut rating = product.rating;
        if self.term.prompt_yes("Change rating?")? {
            rating = self.term.prompt_number("New rating (0-10): ")?;
        }

        let updated = product.revised(name, category, rating, self.today);
        match self.warehouse.update(updated.clone()) {
            Ok(()) => self.term.say(format!("Product updated: {updated}"))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    fn report(&mut self, error: &CoreError) -> io::Result<()> {
        debug!(%error, "Store rejected request");
        match error {
            CoreError::InvalidArgument(_) => self.term.say(format!("Error: {error}")),
            CoreError::NotFound { .. } => self.term.say(error),
        }
    }

    fn print_products(&mut self, header: &str, empty: &str, products: &[Product]) -> io::Result<()> {
        if products.is_empty() {
            return self.term.say(empty);
        }

        self.term.say(header)?;
        for product in products {
            self.term.say(format!("  {product}"))?;
        }
        Ok(())
    }
}
