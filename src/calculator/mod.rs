//! Calculator core.
//!
//! This module provides functionality to:
//! - Enter operands digit by digit and chain binary operators
//! - Apply scientific functions to the current operand
//! - Format results for a bounded-width display

mod error;
mod evaluation;
mod evaluator;
mod scientific;

pub use error::CalcError;
pub use evaluation::{Operator, display_number, evaluate, format_display, format_number};
pub use evaluator::Evaluator;
pub use scientific::{ScientificFunction, factorial};
