//! Facade and services that tie the ledger, goals, and store together.

pub mod forms;
pub mod services;
pub mod tracker;

pub use forms::{GoalForm, TransactionForm};
pub use services::{ChartData, ChartSink, SummaryService};
pub use tracker::BudgetTracker;
