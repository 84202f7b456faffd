//! Calculator state and the operations that drive it.

use tracing::debug;

use super::evaluation::{
    display_number, evaluate, format_display, format_number, parse_operand,
};
use super::{CalcError, Operator, ScientificFunction};
use crate::history::HistoryEntry;

/// Placeholder shown when nothing has been entered.
const ZERO: &str = "0";

/// Operand entry and chained two-operand arithmetic.
///
/// Operators are applied strictly left to right as they are entered; there is
/// no precedence. Operations that complete a calculation return the
/// [`HistoryEntry`] describing it so the caller can record it.
#[derive(Clone, Debug)]
pub struct Evaluator {
    current_input: String,
    previous_input: Option<f64>,
    operator: Option<Operator>,
    should_reset_display: bool,
    error: Option<CalcError>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// A cleared calculator showing `0`.
    pub fn new() -> Self {
        Self {
            current_input: ZERO.to_string(),
            previous_input: None,
            operator: None,
            should_reset_display: false,
            error: None,
        }
    }

    /// The operand as typed so far.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The left operand waiting for an operator to be applied.
    pub fn previous_input(&self) -> Option<f64> {
        self.previous_input
    }

    /// The operator waiting for its second operand.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// The error currently shown instead of the operand, if any.
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Text for the main display: the error label while one is shown,
    /// otherwise the current operand.
    pub fn display(&self) -> &str {
        match self.error {
            Some(error) => error.label(),
            None => &self.current_input,
        }
    }

    /// The pending left-hand side, e.g. `"12 +"`.
    pub fn pending_expression(&self) -> Option<String> {
        match (self.previous_input, self.operator) {
            (Some(previous), Some(op)) => {
                Some(format!("{} {}", display_number(previous), op))
            }
            _ => None,
        }
    }

    /// Revert the display from an error to the current operand.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Type one digit; anything other than `'0'..='9'` is ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        self.dismiss_error();

        if self.should_reset_display {
            self.current_input.clear();
            self.should_reset_display = false;
        }

        if self.current_input == ZERO {
            if digit != '0' {
                self.current_input = digit.to_string();
            }
        } else {
            self.current_input.push(digit);
        }
    }

    /// Type a decimal point unless the operand already has one.
    pub fn input_decimal_point(&mut self) {
        self.dismiss_error();

        if self.should_reset_display {
            self.current_input = ZERO.to_string();
            self.should_reset_display = false;
        }

        if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
    }

    /// Select the next operator, resolving any pending one first.
    pub fn input_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        self.dismiss_error();

        match (self.previous_input, self.operator) {
            (Some(previous), Some(pending)) => {
                let right = parse_operand(&self.current_input);
                let value = self.settle(evaluate(previous, pending, right))?;
                self.previous_input = Some(value);
                self.current_input = display_number(value);
            }
            _ => {
                self.previous_input = Some(parse_operand(&self.current_input));
            }
        }

        self.operator = Some(op);
        self.should_reset_display = true;
        Ok(())
    }

    /// Toggle the sign of the current operand, unless it is zero.
    pub fn negate(&mut self) {
        self.dismiss_error();

        if self.current_input == ZERO {
            return;
        }
        match self.current_input.strip_prefix('-') {
            Some(rest) => self.current_input = rest.to_string(),
            None => self.current_input.insert(0, '-'),
        }
    }

    /// Remove the last typed character.
    pub fn delete(&mut self) {
        self.dismiss_error();

        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input = ZERO.to_string();
        }
    }

    /// Resolve the pending operation.
    ///
    /// Returns `Ok(None)` when there is nothing pending.
    pub fn equals(&mut self) -> Result<Option<HistoryEntry>, CalcError> {
        self.dismiss_error();

        let (Some(previous), Some(op)) = (self.previous_input, self.operator) else {
            return Ok(None);
        };

        let expression = format!(
            "{} {} {}",
            display_number(previous),
            op,
            self.current_input
        );
        let right = parse_operand(&self.current_input);
        let value = self.settle(evaluate(previous, op, right))?;

        self.current_input = display_number(value);
        self.previous_input = None;
        self.operator = None;
        self.should_reset_display = true;

        debug!(%expression, result = %self.current_input, "Calculated");
        Ok(Some(HistoryEntry::new(expression, value)))
    }

    /// Reset every field to its initial value.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Apply `func` to the current operand and replace it with the result.
    pub fn apply_scientific_function(
        &mut self,
        func: ScientificFunction,
    ) -> Result<HistoryEntry, CalcError> {
        self.dismiss_error();

        let input = parse_operand(&self.current_input);
        let expression = format!("{}({})", func, self.current_input);
        let value = self.settle(func.apply(input))?;

        self.current_input = display_number(value);
        self.should_reset_display = true;

        debug!(%expression, result = %self.current_input, "Applied function");
        Ok(HistoryEntry::new(expression, value))
    }

    /// Load `value` as the current operand, e.g. a result picked from history.
    pub fn use_value(&mut self, value: f64) {
        self.dismiss_error();
        self.current_input = format_display(value);
        self.should_reset_display = true;
    }

    /// Format a computed value, or reset to a safe state on error.
    fn settle(&mut self, computed: Result<f64, CalcError>) -> Result<f64, CalcError> {
        match computed {
            Ok(value) => Ok(format_number(value)),
            Err(error) => {
                debug!(%error, "Calculation failed, resetting");
                self.reset_after_error(error);
                Err(error)
            }
        }
    }

    fn reset_after_error(&mut self, error: CalcError) {
        self.current_input = ZERO.to_string();
        self.previous_input = None;
        self.operator = None;
        self.should_reset_display = true;
        self.error = Some(error);
    }
}
