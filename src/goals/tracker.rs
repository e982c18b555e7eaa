use crate::domain::Goal;
use crate::errors::{BudgetError, Result};
use crate::ledger::Ledger;

/// Owns the goal collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalTracker {
    goals: Vec<Goal>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// Validates and appends a goal with zero progress.
    pub fn add_goal(&mut self, name: &str, amount: f64) -> Result<&Goal> {
        let goal = Goal::new(name, amount)?;
        self.goals.push(goal);
        Ok(&self.goals[self.goals.len() - 1])
    }

    pub fn remove_goal(&mut self, index: usize) -> Result<Goal> {
        if index >= self.goals.len() {
            return Err(BudgetError::IndexOutOfRange {
                index,
                len: self.goals.len(),
            });
        }
        Ok(self.goals.remove(index))
    }

    /// Rebuilds every goal's progress from the ledger, discarding prior values.
    ///
    /// Each credit-like transaction contributes its full amount to every goal
    /// whose name it contains, so one deposit can feed several goals. Matching
    /// is unscoped: a goal called "a" picks up every description with an a.
    pub fn recompute_progress(&mut self, ledger: &Ledger) {
        let credits: Vec<(String, f64)> = ledger
            .credits()
            .map(|txn| (txn.description.to_lowercase(), txn.amount))
            .collect();

        for goal in &mut self.goals {
            let pattern = goal.pattern();
            goal.progress = credits
                .iter()
                .filter(|(description, _)| description.contains(&pattern))
                .fold(0.0, |total, (_, amount)| total + amount);
        }
    }

    /// Ledger positions of the credit-like entries that feed the goal at `index`.
    pub fn contributors(&self, index: usize, ledger: &Ledger) -> Vec<usize> {
        let Some(goal) = self.goals.get(index) else {
            return Vec::new();
        };
        let pattern = goal.pattern();
        ledger
            .transactions()
            .iter()
            .enumerate()
            .filter(|(_, txn)| txn.is_credit() && txn.description_contains(&pattern))
            .map(|(position, _)| position)
            .collect()
    }

    pub fn progress_fraction(&self, index: usize) -> Option<f64> {
        self.goals.get(index).map(Goal::progress_fraction)
    }

    pub fn goal(&self, index: usize) -> Option<&Goal> {
        self.goals.get(index)
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}
