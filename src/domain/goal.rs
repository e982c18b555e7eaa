use serde::{Deserialize, Deserializer, Serialize};

use super::common::{validate_amount, validate_label};
use crate::errors::Result;

/// A savings target whose progress is derived from matching ledger entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub amount: f64,
    #[serde(default, deserialize_with = "progress_or_zero")]
    pub progress: f64,
}

impl Goal {
    pub fn new(name: &str, amount: f64) -> Result<Self> {
        Ok(Self {
            name: validate_label("name", name)?,
            amount: validate_amount("amount", amount)?,
            progress: 0.0,
        })
    }

    /// Lowercased name used as the substring pattern against descriptions.
    pub fn pattern(&self) -> String {
        self.name.to_lowercase()
    }

    /// Completion ratio clamped to `[0, 1]`.
    ///
    /// Targets that are zero, negative, or not finite only arrive through
    /// corrupted storage; they report no progress instead of dividing.
    pub fn progress_fraction(&self) -> f64 {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return 0.0;
        }
        let ratio = self.progress / self.amount;
        if ratio.is_nan() {
            return 0.0;
        }
        ratio.clamp(0.0, 1.0)
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction() * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.progress_fraction() >= 1.0
    }

    pub fn remaining(&self) -> f64 {
        (self.amount - self.progress).max(0.0)
    }
}

fn progress_or_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
