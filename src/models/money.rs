//! Parsing and formatting of money amounts
//!
//! Amounts are plain `f64` values in a single currency unit. Text coming from
//! the user goes through [`parse_amount`]; anything shown back to the user goes
//! through [`format_money`].

use std::fmt;

/// Parse a money amount from user input
///
/// Accepts formats: "10.50", "-10.50", "$10.50", "10", " 10 ". Rejects
/// anything that is not a finite number.
pub fn parse_amount(s: &str) -> Result<f64, MoneyParseError> {
    let trimmed = s.trim();

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, trimmed),
    };

    // Remove currency symbol if present
    let rest = rest.strip_prefix('$').unwrap_or(rest).trim_start();

    // f64::from_str would happily take "inf" or "NaN"
    if rest.is_empty() || !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
    }

    let value: f64 = rest
        .parse()
        .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
    }

    Ok(if negative { -value } else { value })
}

/// Format an amount with a currency symbol and two decimals, e.g. "$303.50"
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => {
                write!(f, "Please enter a valid number (got '{}')", s)
            }
        }
    }
}

impl std::error::Error for MoneyParseError {}
