//! `analyze` subcommand: the full set of chain analyses in one run.

use anyhow::Result;
use tracing::info;

use crate::cli::AnalyzeArgs;
use crate::{input, render};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let p = input::read_transition_matrix(&args.matrix)?;
    info!(n_states = p.n_states(), "running full analysis");

    print!("{}", render::format_matrix(p.as_matrix(), "P"));

    let rec = ergo_chain::recurrence_times(&p)?;
    print!("{}", render::format_vector(rec.pi(), "stationary distribution"));
    for (i, t) in rec.times().iter().enumerate() {
        println!("state {i}: expected return time = {t:.6}");
    }

    let m = ergo_chain::first_passage_matrix(&p)?;
    print!("{}", render::format_matrix(&m, "first-passage times"));
    Ok(())
}
