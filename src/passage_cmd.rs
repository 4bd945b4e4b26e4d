//! `passage` subcommand: expected first-passage times.

use anyhow::Result;
use ergo_linalg::TraceEvent;
use tracing::info;

use crate::cli::PassageArgs;
use crate::{input, render};

pub fn run(args: PassageArgs) -> Result<()> {
    let p = input::read_transition_matrix(&args.matrix)?;
    info!(n_states = p.n_states(), "computing first-passage matrix");

    let m = if args.trace {
        let mut events: Vec<TraceEvent> = Vec::new();
        let m = ergo_chain::first_passage_matrix_traced(&p, &mut events)?;
        print!("{}", render::format_trace(&events));
        m
    } else {
        ergo_chain::first_passage_matrix(&p)?
    };

    print!("{}", render::format_matrix(&m, "first-passage times"));
    Ok(())
}
