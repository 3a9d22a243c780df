#![doc(test(attr(deny(warnings))))]

//! Case Ledger tracks the finances of donor/client cases: one account per case, categorized
//! expenses, client invoices, and the balances, KPIs and reminder text derived from them.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod reminder;
pub mod suggest;
pub mod utils;

pub use errors::{TrackerError, TrackerResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Case Ledger tracing initialized.");
    });
}
