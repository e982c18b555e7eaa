//! Raw form submissions as supplied by a view layer.

use crate::domain::{common::parse_amount, Goal, Transaction, TransactionType};
use crate::errors::{BudgetError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionForm {
    pub description: String,
    pub amount: String,
    pub kind: String,
}

impl TransactionForm {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            kind: kind.into(),
        }
    }

    /// Checks every field and builds a transaction stamped with the current time.
    pub fn validate(&self) -> Result<Transaction> {
        if self.kind.trim().is_empty() {
            return Err(BudgetError::validation("type is required"));
        }
        let kind: TransactionType = self.kind.parse()?;
        let amount = parse_amount("amount", &self.amount)?;
        Transaction::new(&self.description, amount, kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalForm {
    pub name: String,
    pub amount: String,
}

impl GoalForm {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }

    pub fn validate(&self) -> Result<Goal> {
        let amount = parse_amount("amount", &self.amount)?;
        Goal::new(&self.name, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_transaction() {
        let txn = TransactionForm::new("  Freelance  ", "250.75", "income")
            .validate()
            .unwrap();
        assert_eq!(txn.description, "Freelance");
        assert_eq!(txn.amount, 250.75);
        assert_eq!(txn.kind, TransactionType::Income);
    }

    #[test]
    fn rejects_each_bad_field() {
        for form in [
            TransactionForm::new("", "50", "income"),
            TransactionForm::new("rent", "-5", "expense"),
            TransactionForm::new("rent", "abc", "expense"),
            TransactionForm::new("rent", "50", "bogus"),
            TransactionForm::new("rent", "50", ""),
        ] {
            let err = form.validate().expect_err("form should be rejected");
            assert!(err.is_validation(), "unexpected error: {err:?}");
        }
    }

    #[test]
    fn goal_form_validation() {
        let goal = GoalForm::new("Car", "1000").validate().unwrap();
        assert_eq!(goal.amount, 1000.0);
        assert!(GoalForm::new(" ", "1000").validate().is_err());
        assert!(GoalForm::new("Car", "0").validate().is_err());
        assert!(GoalForm::new("Car", "").validate().is_err());
    }
}
