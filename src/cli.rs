use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ergo discrete-time Markov chain analyzer.
#[derive(Parser)]
#[command(
    name = "ergo",
    version,
    about = "Discrete-time Markov chain analysis toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the n-step transition matrix P^n.
    Power(PowerArgs),
    /// Compute the stationary distribution π.
    Stationary(StationaryArgs),
    /// Compute expected recurrence times E[T_ii] = 1/π_i.
    Recurrence(RecurrenceArgs),
    /// Compute the matrix of expected first-passage times.
    Passage(PassageArgs),
    /// Run the full analysis: π, recurrence times, first-passage matrix.
    Analyze(AnalyzeArgs),
    /// Simulate a state path through the chain.
    Simulate(SimulateArgs),
}

/// Arguments for the `power` subcommand.
#[derive(clap::Args)]
pub struct PowerArgs {
    /// Transition matrix file (whitespace-separated rows), or `-` for stdin.
    pub matrix: PathBuf,

    /// Number of steps n.
    pub steps: u32,

    /// Print every intermediate power P², P³, … on the way to P^n.
    #[arg(long)]
    pub show_steps: bool,
}

/// Arguments for the `stationary` subcommand.
#[derive(clap::Args)]
pub struct StationaryArgs {
    /// Transition matrix file (whitespace-separated rows), or `-` for stdin.
    pub matrix: PathBuf,

    /// Show the full Gaussian-elimination derivation.
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the `recurrence` subcommand.
#[derive(clap::Args)]
pub struct RecurrenceArgs {
    /// Transition matrix file (whitespace-separated rows), or `-` for stdin.
    pub matrix: PathBuf,

    /// Show the full Gaussian-elimination derivation.
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the `passage` subcommand.
#[derive(clap::Args)]
pub struct PassageArgs {
    /// Transition matrix file (whitespace-separated rows), or `-` for stdin.
    pub matrix: PathBuf,

    /// Show the full Gaussian-elimination derivation per destination state.
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Transition matrix file (whitespace-separated rows), or `-` for stdin.
    pub matrix: PathBuf,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Transition matrix file (whitespace-separated rows), or `-` for stdin.
    pub matrix: PathBuf,

    /// Number of steps to simulate.
    pub steps: usize,

    /// Initial state index.
    #[arg(short, long, default_value_t = 0)]
    pub initial: usize,

    /// RNG seed for a reproducible path.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
