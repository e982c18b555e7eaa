//! Ordered transaction log with credit/debit totals.

#[allow(clippy::module_inception)]
pub mod ledger;

pub use ledger::{Ledger, Totals};
