//! Command-line entry point: load a game document, resolve its stack,
//! print the trace.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use ccg_stack::core::{EngineConfig, GameState};
use ccg_stack::{loader, report, stack};

#[derive(Parser, Debug)]
#[command(name = "ccg-stack")]
#[command(about = "Resolve a trading card game stack and print the trace", long_about = None)]
struct Cli {
    /// Game document to resolve
    #[arg(value_name = "INPUT", default_value = "data/input.json")]
    input: PathBuf,

    /// Log loading, events, and matched triggers to stderr
    #[arg(short, long)]
    debug: bool,
}

fn print_summary(state: &GameState) {
    println!("Parsed {} card definitions", state.cards.len());
    println!("Active player: {}", state.active_player);
    println!("Priority: {}", state.priority_player);
    if let Some(phase) = &state.phase {
        println!("Current Phase: {phase}");
    }
    println!("Stack size: {}", state.stack.len());
    println!();
}

fn run(cli: &Cli) -> Result<()> {
    let config = EngineConfig::default().with_debug(cli.debug);

    let state = loader::load_from_file(&cli.input, &config)
        .with_context(|| format!("could not load {}", cli.input.display()))?;
    print_summary(&state);

    let trace = stack::resolve(state, config);
    print!("{}", report::render(&trace));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
