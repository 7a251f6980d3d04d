#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the transaction ledger, aggregation, and filtering
//! primitives that power a personal finance tracker's user interface.

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
