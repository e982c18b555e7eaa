use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{validate_amount, validate_label};
use crate::errors::{BudgetError, Result};

/// The fixed category set a transaction can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Savings,
    Investment,
}

impl TransactionType {
    pub const ALL: [TransactionType; 4] = [
        TransactionType::Income,
        TransactionType::Expense,
        TransactionType::Savings,
        TransactionType::Investment,
    ];

    /// Income, savings, and investments count as inflow and feed goal progress.
    pub fn is_credit(self) -> bool {
        !self.is_debit()
    }

    pub fn is_debit(self) -> bool {
        matches!(self, TransactionType::Expense)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Savings => "savings",
            TransactionType::Investment => "investment",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the four type names ignoring case and surrounding whitespace, so
/// typed input like `Income` works. Stored JSON always uses the lowercase form.
impl FromStr for TransactionType {
    type Err = BudgetError;

    fn from_str(value: &str) -> Result<Self> {
        let needle = value.trim();
        TransactionType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                BudgetError::validation(format!(
                    "type `{needle}` must be one of income, expense, savings, investment"
                ))
            })
    }
}

/// A single ledger entry. Identity is its position in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Validates the fields and stamps the entry with the current time.
    pub fn new(description: &str, amount: f64, kind: TransactionType) -> Result<Self> {
        Self::recorded_at(description, amount, kind, Utc::now())
    }

    pub fn recorded_at(
        description: &str,
        amount: f64,
        kind: TransactionType,
        date: DateTime<Utc>,
    ) -> Result<Self> {
        Ok(Self {
            description: validate_label("description", description)?,
            amount: validate_amount("amount", amount)?,
            kind,
            date,
        })
    }

    pub fn is_credit(&self) -> bool {
        self.kind.is_credit()
    }

    /// Case-insensitive substring test of `needle` (already lowercased) within the description.
    pub fn description_contains(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
    }
}
