//! The calculator session.
//!
//! A [`Session`] owns one [`Evaluator`] and one [`HistoryStore`]. The
//! presentation layer forwards user [`Action`]s to it and renders the
//! resulting [`DisplayItem`] and history; it holds no calculator state of
//! its own.

mod action;
mod detection;
mod display;

pub use action::Action;
pub use detection::parse_actions;
pub use display::DisplayItem;

use tracing::{info, warn};

use crate::calculator::{CalcError, Evaluator};
use crate::history::{HistoryEntry, HistoryStore, KeyValueStore};

pub struct Session<S: KeyValueStore> {
    evaluator: Evaluator,
    history: HistoryStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a cleared calculator over an already loaded history.
    pub fn new(history: HistoryStore<S>) -> Self {
        Self {
            evaluator: Evaluator::new(),
            history,
        }
    }

    /// Handle one user action.
    ///
    /// On error the evaluator has already reset itself and the display
    /// shows the error label; the error is returned so the caller can
    /// schedule [`Session::dismiss_error`].
    pub fn apply(&mut self, action: Action) -> Result<(), CalcError> {
        match action {
            Action::Digit(digit) => self.evaluator.input_digit(digit),
            Action::Decimal => self.evaluator.input_decimal_point(),
            Action::Operator(op) => self.evaluator.input_operator(op)?,
            Action::Negate => self.evaluator.negate(),
            Action::Delete => self.evaluator.delete(),
            Action::Clear => self.evaluator.clear(),
            Action::Equals => {
                if let Some(entry) = self.evaluator.equals()? {
                    self.history.append(entry);
                }
            }
            Action::Function(func) => {
                let entry = self.evaluator.apply_scientific_function(func)?;
                self.history.append(entry);
            }
            Action::UseHistory(index) => match self.history.get(index) {
                Some(entry) => self.evaluator.use_value(entry.result),
                None => warn!(index, "No history entry at index"),
            },
            Action::ClearHistory => self.clear_history(),
        }
        Ok(())
    }

    /// Apply actions in order, stopping at the first error.
    pub fn apply_all(
        &mut self,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<(), CalcError> {
        actions.into_iter().try_for_each(|action| self.apply(action))
    }

    /// Empty the history and persist the empty log.
    pub fn clear_history(&mut self) {
        self.history.clear();
        info!("History cleared");
    }

    /// Return the display to normal after an error has been shown.
    pub fn dismiss_error(&mut self) {
        self.evaluator.dismiss_error();
    }

    /// What the display should currently show.
    pub fn display_item(&self) -> DisplayItem {
        DisplayItem::from_evaluator(&self.evaluator)
    }

    /// The underlying calculator state.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// The history log, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Plain-text export of the history; fails when it is empty.
    pub fn export_history(&self) -> Result<String, CalcError> {
        self.history.export()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryStore;

    fn session() -> Session<MemoryStore> {
        Session::new(HistoryStore::load(MemoryStore::new()))
    }

    fn run(session: &mut Session<MemoryStore>, line: &str) -> Result<(), CalcError> {
        session.apply_all(parse_actions(line).unwrap())
    }

    #[test]
    fn test_chained_entry() {
        let mut session = session();
        run(&mut session, "1 + 2 + 3 =").unwrap();
        assert_eq!(session.display_item().text, "6");

        // Only the final result is recorded.
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].expression, "3 + 3");
        assert_eq!(session.history()[0].result, 6.0);
    }

    #[test]
    fn test_functions_recorded() {
        let mut session = session();
        run(&mut session, "1 6 sqrt").unwrap();
        run(&mut session, "5 factorial").unwrap();

        let expressions: Vec<_> = session
            .history()
            .iter()
            .map(|e| e.expression.as_str())
            .collect();
        assert_eq!(expressions, vec!["factorial(5)", "sqrt(16)"]);
        assert_eq!(session.display_item().text, "120");
    }

    #[test]
    fn test_errors_not_recorded() {
        let mut session = session();
        assert_eq!(
            run(&mut session, "1 / 0 ="),
            Err(CalcError::DivisionByZero)
        );
        assert!(session.history().is_empty());
        assert!(session.display_item().is_error);

        session.dismiss_error();
        assert_eq!(session.display_item().text, "0");
    }

    #[test]
    fn test_use_history_result() {
        let mut session = session();
        run(&mut session, "6 * 7 =").unwrap();
        run(&mut session, "c 1 0 0").unwrap();
        run(&mut session, "@0 + 8 =").unwrap();
        assert_eq!(session.display_item().text, "50");

        // Out of range is ignored.
        run(&mut session, "use 99").unwrap();
        assert_eq!(session.display_item().text, "50");
    }

    #[test]
    fn test_clear_history() {
        let mut session = session();
        run(&mut session, "2 + 2 =").unwrap();
        assert_eq!(session.export_history().unwrap().lines().count(), 1);

        session.apply(Action::ClearHistory).unwrap();
        assert!(session.history().is_empty());

        run(&mut session, "3 * 3 =").unwrap();
        session.clear_history();
        assert!(session.history().is_empty());
        assert_eq!(session.export_history(), Err(CalcError::EmptyHistory));
    }

    #[test]
    fn test_clear_after_sequence() {
        let mut session = session();
        run(&mut session, "4 * 3 - 2 neg").unwrap();
        session.apply(Action::Clear).unwrap();

        let evaluator = session.evaluator();
        assert_eq!(evaluator.display(), "0");
        assert_eq!(evaluator.operator(), None);
        assert_eq!(evaluator.previous_input(), None);
    }
}
