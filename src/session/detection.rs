//! Token detection for typed calculator input.
//!
//! Turns a line such as `12.5 * 2 =` or `90 sin` into the sequence of
//! [`Action`]s a user would have produced by pressing keys.

use lazy_static::lazy_static;
use regex::Regex;

use super::Action;
use crate::calculator::{Operator, ScientificFunction};

lazy_static! {
    /// Unsigned decimal literal: `12`, `12.`, `12.5`, `.5`.
    static ref NUMBER: Regex = Regex::new(r"^(\d+\.?\d*|\.\d+)$").unwrap();

    /// History reference: `@3` or `use:3`.
    static ref HISTORY_REF: Regex = Regex::new(r"^(?:@|use:)(\d+)$").unwrap();
}

/// Parse a whitespace-separated line of calculator tokens.
///
/// Returns the offending token when something is not recognised.
pub fn parse_actions(input: &str) -> Result<Vec<Action>, String> {
    let mut actions = Vec::new();
    let mut tokens = input.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        if NUMBER.is_match(token) {
            actions.extend(number_actions(token));
            continue;
        }

        if let Some(caps) = HISTORY_REF.captures(token) {
            actions.push(Action::UseHistory(parse_index(&caps[1])?));
            continue;
        }

        // `use 3`
        if token.eq_ignore_ascii_case("use") {
            let index = tokens
                .next()
                .ok_or_else(|| "'use' needs a history index".to_string())?;
            actions.push(Action::UseHistory(parse_index(index)?));
            continue;
        }

        actions.push(parse_token(token)?);
    }

    Ok(actions)
}

fn parse_token(token: &str) -> Result<Action, String> {
    let action = match token.to_lowercase().as_str() {
        "=" | "==" => Action::Equals,
        "." | "," => Action::Decimal,
        "c" | "ac" | "clear" => Action::Clear,
        "del" | "back" | "bs" | "<" => Action::Delete,
        "neg" | "+/-" | "±" => Action::Negate,
        "clear-history" => Action::ClearHistory,
        other => {
            if let Ok(op) = other.parse::<Operator>() {
                Action::Operator(op)
            } else if let Ok(func) = other.parse::<ScientificFunction>() {
                Action::Function(func)
            } else {
                return Err(format!("Unknown input '{}'", token));
            }
        }
    };
    Ok(action)
}

/// Expand a number literal into digit and decimal point presses.
fn number_actions(literal: &str) -> impl Iterator<Item = Action> + '_ {
    literal.chars().map(|c| {
        if c == '.' {
            Action::Decimal
        } else {
            Action::Digit(c)
        }
    })
}

fn parse_index(raw: &str) -> Result<usize, String> {
    raw.parse()
        .map_err(|_| format!("Invalid history index '{}'", raw))
}
