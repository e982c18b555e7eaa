//! Persistence-friendly records for transactions and savings goals.

pub mod common;
pub mod goal;
pub mod transaction;

pub use goal::Goal;
pub use transaction::{Transaction, TransactionType};
