//! Snapshot of what the calculator display should show.

use crate::calculator::Evaluator;

/// The calculator display: the pending expression above the main value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayItem {
    /// The pending left-hand side, e.g. `"12 +"`. Empty when nothing is pending.
    pub expression: String,
    /// The current operand, or the error label.
    pub text: String,
    /// Whether `text` is an error label.
    pub is_error: bool,
}

impl DisplayItem {
    pub fn from_evaluator(evaluator: &Evaluator) -> Self {
        Self {
            expression: evaluator.pending_expression().unwrap_or_default(),
            text: evaluator.display().to_string(),
            is_error: evaluator.error().is_some(),
        }
    }

    /// Single-line rendering, e.g. `"12 + | 3"`.
    pub fn line(&self) -> String {
        if self.expression.is_empty() {
            self.text.clone()
        } else {
            format!("{} | {}", self.expression, self.text)
        }
    }
}
