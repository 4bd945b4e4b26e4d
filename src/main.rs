mod analyze_cmd;
mod cli;
mod input;
mod logging;
mod passage_cmd;
mod power_cmd;
mod recurrence_cmd;
mod render;
mod simulate_cmd;
mod stationary_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Power(args) => power_cmd::run(args),
        Command::Stationary(args) => stationary_cmd::run(args),
        Command::Recurrence(args) => recurrence_cmd::run(args),
        Command::Passage(args) => passage_cmd::run(args),
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Simulate(args) => simulate_cmd::run(args),
    }
}
