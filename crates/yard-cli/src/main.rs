//! Yard CLI Application
//!
//! Command-line dispatch board for the lumber yard.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use yard_core::{access::PinGate, params::ShowBoard, DispatcherBuilder};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        storage_key,
        no_color,
        pin,
        dispatch_pin,
        command,
    } = Args::parse();

    let dispatcher = DispatcherBuilder::new()
        .with_database_path(database_file)
        .with_storage_key(storage_key)
        .with_gate(PinGate::new(dispatch_pin))
        .build()
        .context("Failed to initialize dispatcher")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Yard started");

    let mut cli = Cli::new(dispatcher, renderer, pin);
    match command {
        Some(Board(args)) => {
            let compact = args.compact;
            cli.show_board(&args.into(), compact)
        }
        Some(Stop { command }) => cli.handle_stop_command(command),
        Some(Dep { command }) => cli.handle_dep_command(command),
        Some(Estimate(args)) => cli.estimate(&args.into()),
        None => cli.show_board(&ShowBoard::default(), false),
    }
}
