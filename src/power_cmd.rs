//! `power` subcommand: n-step transition probabilities.

use anyhow::Result;
use tracing::info;

use crate::cli::PowerArgs;
use crate::{input, render};

pub fn run(args: PowerArgs) -> Result<()> {
    let p = input::read_transition_matrix(&args.matrix)?;
    info!(n_states = p.n_states(), steps = args.steps, "computing n-step matrix");

    if args.show_steps && args.steps >= 1 {
        // Walk the same P, P², P³, … chain the power computation takes.
        let mut current = p.as_matrix().clone();
        print!("{}", render::format_matrix(&current, "P"));
        for step in 2..=args.steps {
            current = current.multiply(p.as_matrix())?;
            print!("{}", render::format_matrix(&current, &format!("P^{step}")));
        }
    } else {
        let pn = p.n_step(args.steps)?;
        print!("{}", render::format_matrix(&pn, &format!("P^{}", args.steps)));
    }
    Ok(())
}
