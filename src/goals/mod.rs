//! Savings goals and their derived progress.

pub mod tracker;

pub use tracker::GoalTracker;
