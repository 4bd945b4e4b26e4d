//! `simulate` subcommand: sample a state path through the chain.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::cli::SimulateArgs;
use crate::input;

/// Builds a seeded or OS-sourced RNG.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let p = input::read_transition_matrix(&args.matrix)?;
    info!(
        n_states = p.n_states(),
        steps = args.steps,
        initial = args.initial,
        "simulating path"
    );

    let mut rng = make_rng(args.seed);
    let path = ergo_chain::simulate_path(&p, args.initial, args.steps, &mut rng)?;

    let rendered: Vec<String> = path.iter().map(|s| s.to_string()).collect();
    println!("path: {} -> {}", args.initial, rendered.join(" -> "));

    let mut visits = vec![0usize; p.n_states()];
    for &s in &path {
        visits[s] += 1;
    }
    for (state, count) in visits.iter().enumerate() {
        let share = *count as f64 / path.len().max(1) as f64;
        println!("state {state}: {count} visits ({share:.4})");
    }
    Ok(())
}
