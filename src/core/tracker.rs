use tracing::{debug, info, warn};

use crate::core::forms::{GoalForm, TransactionForm};
use crate::core::services::{ChartData, ChartSink, SummaryService};
use crate::domain::{Goal, Transaction, TransactionType};
use crate::errors::{BudgetError, Result};
use crate::goals::GoalTracker;
use crate::ledger::{Ledger, Totals};
use crate::storage::{Store, GOALS_KEY, TRANSACTIONS_KEY};

/// Owns the ledger, the goals, and their store, and keeps derived state in
/// step after every mutation.
///
/// Each mutation saves the changed collection, recomputes totals and goal
/// progress from scratch, saves the goals, then pushes a fresh chart payload
/// to every subscribed sink.
pub struct BudgetTracker {
    ledger: Ledger,
    goals: GoalTracker,
    store: Store,
    sinks: Vec<Box<dyn ChartSink>>,
}

impl BudgetTracker {
    /// Loads both collections and derives goal progress in memory.
    ///
    /// Nothing is written until the first mutation.
    pub fn open(store: Store) -> Self {
        let ledger = Ledger::from_transactions(store.load(TRANSACTIONS_KEY));
        let mut goals = GoalTracker::from_goals(store.load(GOALS_KEY));
        goals.recompute_progress(&ledger);
        info!(
            transactions = ledger.len(),
            goals = goals.len(),
            "budget tracker opened"
        );
        Self {
            ledger,
            goals,
            store,
            sinks: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, sink: Box<dyn ChartSink>) {
        self.sinks.push(sink);
    }

    /// Drops every subscribed sink, typically before subscribing a reconfigured one.
    pub fn clear_sinks(&mut self) {
        self.sinks.clear();
    }

    /// Pushes the current chart payload to every sink without mutating anything.
    pub fn refresh(&mut self) {
        self.notify();
    }

    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionType,
    ) -> Result<Transaction> {
        let transaction = Transaction::new(description, amount, kind)?;
        self.record_transaction(transaction)
    }

    pub fn submit_transaction(&mut self, form: &TransactionForm) -> Result<Transaction> {
        let transaction = form.validate()?;
        self.record_transaction(transaction)
    }

    fn record_transaction(&mut self, transaction: Transaction) -> Result<Transaction> {
        self.ledger.push(transaction.clone());
        if let Err(err) = self.save_transactions() {
            self.ledger.remove_transaction(self.ledger.len() - 1)?;
            return Err(err);
        }
        info!(
            kind = %transaction.kind,
            amount = transaction.amount,
            "transaction added"
        );
        self.after_mutation()?;
        Ok(transaction)
    }

    /// Removes the transaction at `index`.
    ///
    /// An index past the end is ignored and returns `Ok(None)` without
    /// writing anything.
    pub fn delete_transaction(&mut self, index: usize) -> Result<Option<Transaction>> {
        let removed = match self.ledger.remove_transaction(index) {
            Ok(removed) => removed,
            Err(BudgetError::IndexOutOfRange { index, len }) => {
                warn!(index, len, "ignoring delete of missing transaction");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        if let Err(err) = self.save_transactions() {
            self.ledger.insert(index, removed);
            return Err(err);
        }
        info!(index, "transaction deleted");
        self.after_mutation()?;
        Ok(Some(removed))
    }

    /// Adds a goal and returns it with progress already derived from the ledger.
    pub fn add_goal(&mut self, name: &str, amount: f64) -> Result<Goal> {
        let goal = Goal::new(name, amount)?;
        self.record_goal(goal)
    }

    pub fn submit_goal(&mut self, form: &GoalForm) -> Result<Goal> {
        let goal = form.validate()?;
        self.record_goal(goal)
    }

    fn record_goal(&mut self, goal: Goal) -> Result<Goal> {
        let mut goals = self.goals.goals().to_vec();
        goals.push(goal);
        self.store.save(GOALS_KEY, &goals)?;
        self.goals = GoalTracker::from_goals(goals);
        info!(goals = self.goals.len(), "goal added");
        self.after_mutation()?;
        let index = self.goals.len() - 1;
        self.goals
            .goal(index)
            .cloned()
            .ok_or(BudgetError::IndexOutOfRange {
                index,
                len: self.goals.len(),
            })
    }

    /// Removes the goal at `index`; same bounds contract as transactions.
    pub fn delete_goal(&mut self, index: usize) -> Result<Option<Goal>> {
        let Some(goal) = self.goals.goal(index).cloned() else {
            warn!(index, len = self.goals.len(), "ignoring delete of missing goal");
            return Ok(None);
        };
        let mut remaining = self.goals.goals().to_vec();
        remaining.remove(index);
        self.store.save(GOALS_KEY, &remaining)?;
        self.goals = GoalTracker::from_goals(remaining);
        info!(index, "goal deleted");
        self.after_mutation()?;
        Ok(Some(goal))
    }

    fn save_transactions(&self) -> Result<()> {
        self.store
            .save(TRANSACTIONS_KEY, self.ledger.transactions())
    }

    fn after_mutation(&mut self) -> Result<()> {
        let totals = self.ledger.compute_totals();
        debug!(
            income = totals.income,
            expenses = totals.expenses,
            balance = totals.balance,
            "totals recomputed"
        );
        self.goals.recompute_progress(&self.ledger);
        self.store.save(GOALS_KEY, self.goals.goals())?;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.sinks.is_empty() {
            return;
        }
        let data = SummaryService::chart_data(&self.ledger);
        for sink in &mut self.sinks {
            sink.render(&data);
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn goal_tracker(&self) -> &GoalTracker {
        &self.goals
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn goals(&self) -> &[Goal] {
        self.goals.goals()
    }

    pub fn totals(&self) -> Totals {
        SummaryService::snapshot(&self.ledger)
    }

    pub fn chart_data(&self) -> ChartData {
        SummaryService::chart_data(&self.ledger)
    }

    pub fn progress_fraction(&self, index: usize) -> Option<f64> {
        self.goals.progress_fraction(index)
    }

    pub fn contributors(&self, index: usize) -> Vec<usize> {
        self.goals.contributors(index, &self.ledger)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::storage::KeyValueBackend;

    struct RecordingSink(Arc<Mutex<Vec<ChartData>>>);

    impl ChartSink for RecordingSink {
        fn render(&mut self, data: &ChartData) {
            self.0.lock().unwrap().push(data.clone());
        }
    }

    struct FailingBackend;

    impl KeyValueBackend for FailingBackend {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, key: &str, _value: &str) -> Result<()> {
            Err(BudgetError::Storage(format!("cannot write {key}")))
        }
    }

    #[test]
    fn mutation_pipeline_persists_both_collections() {
        let mut tracker = BudgetTracker::open(Store::in_memory());
        tracker.add_goal("car", 1000.0).unwrap();
        tracker
            .add_transaction("Car Fund Deposit", 500.0, TransactionType::Savings)
            .unwrap();

        let stored_goals: Vec<Goal> = tracker.store().load(GOALS_KEY);
        assert_eq!(stored_goals[0].progress, 500.0);
        let stored_txns: Vec<Transaction> = tracker.store().load(TRANSACTIONS_KEY);
        assert_eq!(stored_txns.len(), 1);
    }

    #[test]
    fn sinks_receive_payload_after_each_mutation() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut tracker = BudgetTracker::open(Store::in_memory());
        tracker.subscribe(Box::new(RecordingSink(seen.clone())));
        tracker.refresh();
        tracker
            .add_transaction("Salary", 100.0, TransactionType::Income)
            .unwrap();
        tracker
            .add_transaction("Lunch", 30.0, TransactionType::Expense)
            .unwrap();
        tracker.delete_transaction(0).unwrap();
        tracker.clear_sinks();
        tracker.refresh();

        let seen = seen.lock().unwrap();
        let values: Vec<[f64; 3]> = seen.iter().map(|data| data.values).collect();
        assert_eq!(
            values,
            [
                [0.0, 0.0, 0.0],
                [100.0, 0.0, 100.0],
                [100.0, 30.0, 70.0],
                [0.0, 30.0, -30.0],
            ]
        );
    }

    #[test]
    fn validation_failure_skips_pipeline() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut tracker = BudgetTracker::open(Store::in_memory());
        tracker.subscribe(Box::new(RecordingSink(seen.clone())));
        let err = tracker
            .add_transaction("", 50.0, TransactionType::Income)
            .expect_err("blank description");
        assert!(err.is_validation());
        assert!(seen.lock().unwrap().is_empty());
        assert!(tracker.store().backend().get(TRANSACTIONS_KEY).unwrap().is_none());
    }

    #[test]
    fn out_of_range_delete_is_a_no_op() {
        let mut tracker = BudgetTracker::open(Store::in_memory());
        tracker
            .add_transaction("Salary", 100.0, TransactionType::Income)
            .unwrap();
        assert!(tracker.delete_transaction(5).unwrap().is_none());
        assert!(tracker.delete_goal(0).unwrap().is_none());
        assert_eq!(tracker.transactions().len(), 1);
    }

    #[test]
    fn new_goal_reflects_existing_transactions() {
        let mut tracker = BudgetTracker::open(Store::in_memory());
        tracker
            .add_transaction("House deposit", 2000.0, TransactionType::Savings)
            .unwrap();
        let goal = tracker.add_goal("house", 10_000.0).unwrap();
        assert_eq!(goal.progress, 2000.0);
        assert_eq!(tracker.progress_fraction(0), Some(0.2));
    }

    #[test]
    fn failed_write_rolls_back_in_memory_state() {
        let mut tracker = BudgetTracker::open(Store::new(Box::new(FailingBackend)));
        let err = tracker
            .add_transaction("Salary", 100.0, TransactionType::Income)
            .expect_err("write fails");
        assert!(matches!(err, BudgetError::Storage(_)));
        assert!(tracker.transactions().is_empty());

        assert!(tracker.add_goal("Car", 100.0).is_err());
        assert!(tracker.goals().is_empty());
    }

    #[test]
    fn contributors_are_ledger_positions() {
        let mut tracker = BudgetTracker::open(Store::in_memory());
        tracker.add_goal("bike", 400.0).unwrap();
        tracker
            .add_transaction("Bike fund", 50.0, TransactionType::Savings)
            .unwrap();
        tracker
            .add_transaction("Bike tyres", 30.0, TransactionType::Expense)
            .unwrap();
        assert_eq!(tracker.contributors(0), [0]);
    }
}
