//! Binary arithmetic and number formatting.
//!
//! Every value that reaches the display or the history goes through
//! [`format_number`], which keeps results at a bounded width so they
//! survive being typed back in as the next operand.

use std::fmt;
use std::str::FromStr;

use super::CalcError;

/// Display strings longer than this are rounded.
const MAX_DISPLAY_CHARS: usize = 12;

/// Significant digits kept when a value is rounded for display.
const SIGNIFICANT_DIGITS: usize = 12;

/// A binary operator waiting for its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown in expressions ("+", "-", "*", "/").
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "×" | "x" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(format!("Unknown operator '{}'", other)),
        }
    }
}

/// Apply `operator` to `(left, right)`.
///
/// Division by exactly zero is reported separately from other non-finite
/// results so the caller can show a dedicated message.
pub fn evaluate(left: f64, operator: Operator, right: f64) -> Result<f64, CalcError> {
    let value = match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            left / right
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidResult)
    }
}

/// Round `value` to 12 significant digits when its display form is longer
/// than 12 characters. Shorter values are returned unchanged.
pub fn format_number(value: f64) -> f64 {
    if !value.is_finite() || display_number(value).len() <= MAX_DISPLAY_CHARS {
        return value;
    }

    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Format a number the way the calculator shows it.
///
/// Plain decimal notation in the usual range, exponent notation
/// (`1.5e+21`, `1e-7`) for very large or very small magnitudes.
pub fn display_number(value: f64) -> String {
    // Also folds negative zero into "0".
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if value.is_finite() && (magnitude >= 1e21 || magnitude < 1e-6) {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

/// Format and round in one step.
pub fn format_display(value: f64) -> String {
    display_number(format_number(value))
}

/// Parse the operand the user has typed so far.
///
/// Incomplete entries such as `"12."`, `"-"` or an empty string are read
/// leniently instead of failing.
pub fn parse_operand(input: &str) -> f64 {
    let trimmed = input.trim().trim_end_matches('.');
    match trimmed {
        "" | "-" => 0.0,
        _ => trimmed.parse().unwrap_or(0.0),
    }
}
