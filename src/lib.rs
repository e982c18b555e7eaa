#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps an ordered log of transactions and a set of savings
//! goals, and derives totals, goal progress, and chart payloads from them.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod goals;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::{BudgetTracker, ChartData, ChartSink, GoalForm, TransactionForm};
pub use crate::domain::{Goal, Transaction, TransactionType};
pub use crate::errors::BudgetError;
pub use crate::ledger::{Ledger, Totals};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Tracker tracing initialized.");
    });
}
