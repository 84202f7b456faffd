//! Line-oriented terminal front end.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use crate::history::KeyValueStore;
use crate::session::{Session, parse_actions};

const HELP: &str = "\
Enter key presses separated by spaces, e.g. `12.5 * 4 =` or `90 sin`.
  digits . + - * / =    entry and arithmetic
  neg del c             negate, delete, clear
  sin cos tan asin acos atan sinh cosh tanh
  log ln sqrt pow exp pow10 factorial abs floor ceil pi e
  @N | use N            reuse result N from history (0 = newest)
Commands: history, export [FILE], clear-history, help, quit";

/// File name used when exporting without an explicit path.
pub fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "calculator-history-{}.txt",
        Local::now().format("%Y-%m-%d")
    ))
}

/// Write the history export to `path`.
pub fn export_to<S: KeyValueStore>(session: &Session<S>, path: &Path) -> Result<()> {
    let text = session
        .export_history()
        .map_err(|e| anyhow::anyhow!(e.label()))?;
    fs::write(path, text + "\n")
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    info!(path = %path.display(), "Exported history");
    Ok(())
}

/// Print the history, newest first.
pub fn print_history<S: KeyValueStore>(session: &Session<S>, out: &mut impl Write) -> Result<()> {
    if session.history().is_empty() {
        writeln!(out, "No calculations yet")?;
        return Ok(());
    }
    for (index, entry) in session.history().iter().enumerate() {
        writeln!(
            out,
            "{:>3}  {} = {}  ({})",
            index,
            entry.expression,
            entry.display_result(),
            entry.timestamp
        )?;
    }
    Ok(())
}

/// Run the interactive loop until `quit` or end of input.
pub fn run<S: KeyValueStore>(
    session: &mut Session<S>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "{}", session.display_item().line())?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some("quit" | "exit" | "q") => break,
            Some("help" | "?") => writeln!(out, "{}", HELP)?,
            Some("history" | "h") => print_history(session, out)?,
            Some("export") => {
                let path = words
                    .next()
                    .map(PathBuf::from)
                    .unwrap_or_else(default_export_path);
                match export_to(session, &path) {
                    Ok(()) => writeln!(out, "Exported to {}", path.display())?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            Some(_) => match parse_actions(line) {
                Ok(actions) => {
                    let result = session.apply_all(actions);
                    writeln!(out, "{}", session.display_item().line())?;
                    // The error label is shown once, then the display reverts.
                    if result.is_err() {
                        session.dismiss_error();
                    }
                }
                Err(message) => writeln!(out, "{}", message)?,
            },
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{HistoryStore, MemoryStore};
    use std::io::Cursor;

    fn run_script(script: &str) -> (Session<MemoryStore>, String) {
        let mut session = Session::new(HistoryStore::load(MemoryStore::new()));
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_repl_calculates() {
        let (session, out) = run_script("1 + 2 +\n3 =\nquit\n4\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["0", "3 + | 3", "6"]);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_repl_reports_errors_then_reverts() {
        let (_, out) = run_script("5 / 0 =\n7\n");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines, vec!["0", "Cannot divide by zero", "7"]);
    }

    #[test]
    fn test_repl_unknown_token() {
        let (_, out) = run_script("2 % 3\n");
        assert!(out.contains("Unknown input '%'"));
    }

    #[test]
    fn test_repl_history_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let script = format!("history\n2 * 2 =\nhistory\nexport {}\n", path.display());
        let (_, out) = run_script(&script);

        assert!(out.contains("No calculations yet"));
        assert!(out.contains("  0  2 * 2 = 4  ("));
        let exported = fs::read_to_string(&path).unwrap();
        assert!(exported.starts_with("2 * 2 = 4 ("));
    }

    #[test]
    fn test_export_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let script = format!("export {}\n", dir.path().join("x.txt").display());
        let (_, out) = run_script(&script);
        assert!(out.contains("No history to export"));
    }

    #[test]
    fn test_default_export_path_is_date_stamped() {
        let name = default_export_path().display().to_string();
        assert!(name.starts_with("calculator-history-"));
        assert!(name.ends_with(".txt"));
    }
}
