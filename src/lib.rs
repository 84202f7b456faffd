pub mod calculator;
pub mod cli;
pub mod config;
pub mod history;
pub mod logging;
pub mod repl;
pub mod session;
