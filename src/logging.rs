use tracing_subscriber::EnvFilter;

/// Initialize tracing from the CLI verbosity count.
///
/// `-v` enables info, `-vv` debug, `-vvv` and beyond trace; without flags
/// only warnings are shown. The filter applies to the workspace crates
/// (`ergo`, `ergo_chain`, `ergo_linalg`); a `RUST_LOG` env var, when set,
/// replaces it entirely.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ergo={level},ergo_chain={level},ergo_linalg={level}"
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
