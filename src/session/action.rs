use crate::calculator::{Operator, ScientificFunction};

/// A user action forwarded to the [`Session`](super::Session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Digit(char),
    Decimal,
    Operator(Operator),
    Negate,
    Delete,
    Equals,
    Clear,
    Function(ScientificFunction),
    /// Load the result of the history entry at this index (0 = newest).
    UseHistory(usize),
    ClearHistory,
}
