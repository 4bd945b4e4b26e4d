//! `stationary` subcommand: the distribution π with π = πP.

use anyhow::Result;
use ergo_linalg::TraceEvent;
use tracing::info;

use crate::cli::StationaryArgs;
use crate::{input, render};

pub fn run(args: StationaryArgs) -> Result<()> {
    let p = input::read_transition_matrix(&args.matrix)?;
    info!(n_states = p.n_states(), "computing stationary distribution");

    let pi = if args.trace {
        let mut events: Vec<TraceEvent> = Vec::new();
        let pi = ergo_chain::stationary_distribution_traced(&p, &mut events)?;
        print!("{}", render::format_trace(&events));
        pi
    } else {
        ergo_chain::stationary_distribution(&p)?
    };

    print!("{}", render::format_vector(&pi, "stationary distribution"));
    Ok(())
}
