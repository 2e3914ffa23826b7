use std::path::PathBuf;

use clap::{Parser, Subcommand};
use yard_core::{access::DEFAULT_DISPATCH_PIN, store::DEFAULT_STORAGE_KEY};

use crate::cli::{BoardArgs, DepCommands, EstimateArgs, StopCommands};

/// Dispatch board for the lumber yard
///
/// Schedules delivery stops into the day's time slots, tracks what outside
/// suppliers still owe for each stop, and keeps unchecked orders off the
/// truck. Reading the board is always allowed; changes need the dispatcher
/// PIN.
#[derive(Parser)]
#[command(version, about, name = "yard")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/yard/yard.db
    #[arg(long, global = true, env = "YARD_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Key the stop collection is stored under; separate keys keep separate
    /// boards in one database
    #[arg(
        long,
        global = true,
        env = "YARD_STORAGE_KEY",
        default_value = DEFAULT_STORAGE_KEY
    )]
    pub storage_key: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Dispatcher PIN used to unlock changes
    #[arg(long, global = true, env = "YARD_PIN", hide_env_values = true)]
    pub pin: Option<String>,

    /// PIN the board expects
    #[arg(
        long,
        global = true,
        hide = true,
        env = "YARD_DISPATCH_PIN",
        hide_env_values = true,
        default_value = DEFAULT_DISPATCH_PIN
    )]
    pub dispatch_pin: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the yard CLI
///
/// Without a command the board for today is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the board for a day
    #[command(alias = "b")]
    Board(BoardArgs),
    /// Manage delivery stops
    #[command(alias = "s")]
    Stop {
        #[command(subcommand)]
        command: StopCommands,
    },
    /// Manage supplier dependencies on a stop
    #[command(alias = "d")]
    Dep {
        #[command(subcommand)]
        command: DepCommands,
    },
    /// Rough round-trip time for a delivery
    #[command(alias = "e")]
    Estimate(EstimateArgs),
}
