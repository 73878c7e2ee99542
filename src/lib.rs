pub mod app;
pub mod command;
pub mod console;
pub mod date;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod response;
pub mod task;
pub mod todolist;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI shared between main and tests
#[derive(Parser, Debug)]
#[command(name = "zen", version, about = "A personal task tracker driven by short text commands")]
pub struct Cli {
    /// Task file location
    #[arg(long, env = "ZEN_DATA_FILE", default_value = persistence::DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Read commands line by line from stdin (the default)
    Console,
    /// Launch the full-screen dialog
    Tui,
    /// Run a single command, e.g. `zen run todo read book`
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Print all tasks as JSON
    Export,
}
