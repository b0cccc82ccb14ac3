//! # Warehouse Console Library
//!
//! Wires configuration, logging and the menu session together.
//!
//! ## Module Organization
//! ```text
//! warehouse_console/
//! ├── lib.rs          ◄─── You are here (startup sequence)
//! ├── config.rs       ◄─── Environment configuration
//! ├── input.rs        ◄─── Prompting + parsing raw text
//! ├── session.rs      ◄─── Menu loop and actions
//! └── seed.rs         ◄─── Demo products
//! ```

pub mod config;
pub mod input;
pub mod seed;
pub mod session;

use std::{env, io};

use anyhow::Context;
use chrono::Local;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use warehouse_core::Warehouse;

use config::ConsoleConfig;
use session::Session;

/// Runs the console application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load configuration (WAREHOUSE_* environment variables)              │
/// │  2. Initialize logging to stderr                                        │
/// │  3. Resolve "today" (WAREHOUSE_TODAY or the local clock)                │
/// │  4. Create the empty store, seed demo products if enabled               │
/// │  5. Run the menu on stdin / stdout until exit                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    let config = ConsoleConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log_filter)?;

    let today = config.today.unwrap_or_else(|| Local::now().date_naive());
    info!(%today, seed_demo = config.seed_demo, "Starting warehouse console");

    let mut warehouse = Warehouse::new();
    if config.seed_demo {
        seed::seed_demo(&mut warehouse, today).context("failed to seed demo products")?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(warehouse, stdin.lock(), stdout.lock(), today);
    session.run().context("console I/O failed")?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - wins over everything
/// - `WAREHOUSE_LOG=...` - used when `RUST_LOG` is unset
/// - Default: WARN, so the menu stays readable
///
/// An unparseable `RUST_LOG` is reported with `warn!` once the subscriber is up.
fn init_tracing(fallback: &str) -> anyhow::Result<()> {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = select_filter(rust_log.as_deref(), fallback)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Some(rust_log) = rejected {
        warn!(%rust_log, %fallback, "Ignoring invalid RUST_LOG, using fallback filter");
    }

    Ok(())
}

/// Picks `RUST_LOG` when it parses, otherwise `fallback`.
///
/// Returns the rejected `RUST_LOG` value alongside the filter. Blank
/// `RUST_LOG` counts as unset.
fn select_filter(
    rust_log: Option<&str>,
    fallback: &str,
) -> anyhow::Result<(EnvFilter, Option<String>)> {
    let mut rejected = None;

    if let Some(directives) = rust_log.filter(|v| !v.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok((filter, None)),
            Err(_) => rejected = Some(directives.to_string()),
        }
    }

    let filter = EnvFilter::try_new(fallback)
        .with_context(|| format!("invalid log filter {fallback:?}"))?;
    Ok((filter, rejected))
}
