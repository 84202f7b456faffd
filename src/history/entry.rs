//! A single recorded calculation.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::calculator::display_number;

/// Format used for entry timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One past calculation, e.g. `"2 + 2" = 4`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Human-readable expression: `"{left} {op} {right}"` or `"{func}({value})"`.
    pub expression: String,
    /// The already formatted result.
    pub result: f64,
    /// Local creation time.
    pub timestamp: String,
}

impl HistoryEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self::with_timestamp(
            expression,
            result,
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
        )
    }

    /// Create an entry with an explicit timestamp.
    pub fn with_timestamp(
        expression: impl Into<String>,
        result: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            result,
            timestamp: timestamp.into(),
        }
    }

    /// The result as shown on the display.
    pub fn display_result(&self) -> String {
        display_number(self.result)
    }

    /// Plain-text line used by history export.
    pub fn export_line(&self) -> String {
        format!(
            "{} = {} ({})",
            self.expression,
            self.display_result(),
            self.timestamp
        )
    }
}
