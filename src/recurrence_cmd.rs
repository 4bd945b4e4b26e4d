//! `recurrence` subcommand: expected return times per state.

use anyhow::Result;
use ergo_linalg::TraceEvent;
use tracing::info;

use crate::cli::RecurrenceArgs;
use crate::{input, render};

pub fn run(args: RecurrenceArgs) -> Result<()> {
    let p = input::read_transition_matrix(&args.matrix)?;
    info!(n_states = p.n_states(), "computing recurrence times");

    let rec = if args.trace {
        let mut events: Vec<TraceEvent> = Vec::new();
        let rec = ergo_chain::recurrence_times_traced(&p, &mut events)?;
        print!("{}", render::format_trace(&events));
        rec
    } else {
        ergo_chain::recurrence_times(&p)?
    };

    print!("{}", render::format_vector(rec.pi(), "stationary distribution"));
    for (i, (pi_i, t)) in rec.pi().iter().zip(rec.times().iter()).enumerate() {
        println!("state {i}: pi = {pi_i:.6}, expected return time = {t:.6}");
    }
    Ok(())
}
