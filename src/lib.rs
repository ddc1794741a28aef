#![doc(test(attr(deny(warnings))))]

//! Wallet Core tracks incomes, expenses, debts, fixed costs, and recurring
//! income in a local key/value store, derives summary figures from them, and
//! renders bilingual (Turkish/English) terminal and PDF views.

pub mod cli;
pub mod config;
pub mod contact;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod report;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod summary;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Wallet Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
