use serde::{Deserialize, Serialize};

use crate::domain::{Transaction, TransactionType};
use crate::errors::{BudgetError, Result};

/// Aggregate inflow, outflow, and their difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Owns the transaction collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Validates and appends a new entry stamped with the current time.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionType,
    ) -> Result<&Transaction> {
        let transaction = Transaction::new(description, amount, kind)?;
        Ok(self.push(transaction))
    }

    pub fn push(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }

    /// Puts an entry back at `index`, or at the end when `index` is past it.
    pub fn insert(&mut self, index: usize, transaction: Transaction) {
        let index = index.min(self.transactions.len());
        self.transactions.insert(index, transaction);
    }

    pub fn remove_transaction(&mut self, index: usize) -> Result<Transaction> {
        if index >= self.transactions.len() {
            return Err(BudgetError::IndexOutOfRange {
                index,
                len: self.transactions.len(),
            });
        }
        Ok(self.transactions.remove(index))
    }

    pub fn transaction(&self, index: usize) -> Option<&Transaction> {
        self.transactions.get(index)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn credits(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|txn| txn.is_credit())
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Single pass over every entry; nothing is cached between calls.
    pub fn compute_totals(&self) -> Totals {
        let (income, expenses) =
            self.transactions
                .iter()
                .fold((0.0, 0.0), |(income, expenses), txn| {
                    if txn.is_credit() {
                        (income + txn.amount, expenses)
                    } else {
                        (income, expenses + txn.amount)
                    }
                });
        Totals {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}
