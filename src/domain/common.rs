//! Field validation shared by transaction and goal constructors.

use crate::errors::{BudgetError, Result};

/// Trims a user-supplied label and rejects it when nothing is left.
pub fn validate_label(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Accepts only finite amounts strictly greater than zero.
pub fn validate_amount(field: &str, amount: f64) -> Result<f64> {
    if !amount.is_finite() {
        return Err(BudgetError::validation(format!(
            "{field} must be a finite number"
        )));
    }
    if amount <= 0.0 {
        return Err(BudgetError::validation(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(amount)
}

/// Parses a raw form value into a validated amount.
pub fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::validation(format!("{field} is required")));
    }
    let amount = trimmed
        .parse::<f64>()
        .map_err(|_| BudgetError::validation(format!("{field} `{trimmed}` is not a number")))?;
    validate_amount(field, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_trimmed() {
        assert_eq!(validate_label("name", "  Car  ").unwrap(), "Car");
    }

    #[test]
    fn blank_label_is_rejected() {
        let err = validate_label("description", " \t ").expect_err("blank label");
        assert!(err.is_validation());
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn amount_rules() {
        assert!(validate_amount("amount", 0.01).is_ok());
        assert!(validate_amount("amount", 0.0).is_err());
        assert!(validate_amount("amount", -5.0).is_err());
        assert!(validate_amount("amount", f64::NAN).is_err());
        assert!(validate_amount("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert_eq!(parse_amount("amount", " 12.5 ").unwrap(), 12.5);
        assert!(parse_amount("amount", "").is_err());
        assert!(parse_amount("amount", "twelve").is_err());
        assert!(parse_amount("amount", "-3").is_err());
        assert!(parse_amount("amount", "NaN").is_err());
    }
}
