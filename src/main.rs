use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use zcalc::cli::{Cli, Command};
use zcalc::config::Config;
use zcalc::history::{FileStore, HistoryStore, KeyValueStore, MemoryStore};
use zcalc::repl;
use zcalc::session::{Session, parse_actions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    zcalc::logging::init(&cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    debug!(?config, "Loaded configuration");

    if cli.ephemeral {
        run(cli.command, &config, MemoryStore::new())
    } else {
        run(cli.command, &config, FileStore::new(&config.data_dir))
    }
}

fn run<S: KeyValueStore>(command: Option<Command>, config: &Config, storage: S) -> Result<()> {
    let history = HistoryStore::load_with(storage, &config.history_key, config.history_capacity);
    let mut session = Session::new(history);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command.unwrap_or(Command::Repl) {
        Command::Repl => repl::run(&mut session, io::stdin().lock(), &mut out)?,
        Command::Eval { tokens } => {
            let actions = parse_actions(&tokens.join(" ")).map_err(anyhow::Error::msg)?;
            // An error leaves its label on the display, which is what we print.
            let _ = session.apply_all(actions);
            writeln!(out, "{}", session.display_item().text)?;
        }
        Command::History { clear: true, .. } => {
            session.clear_history();
            writeln!(out, "History cleared")?;
        }
        Command::History {
            export: Some(path),
            ..
        } => {
            let path = path.unwrap_or_else(repl::default_export_path);
            repl::export_to(&session, &path)?;
            writeln!(out, "Exported to {}", path.display())?;
        }
        Command::History { .. } => repl::print_history(&session, &mut out)?,
    }

    Ok(())
}
