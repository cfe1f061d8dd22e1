//! tickbox binary: runs the todo REPL on stdin/stdout.

use std::io;
use tickbox::{Config, Repl};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    // Initialize tracing; stdout belongs to the REPL
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickbox=warn,tickbox_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "Starting tickbox");

    let mut repl = Repl::new(config);
    repl.run(io::stdin().lock(), io::stdout().lock())?;

    tracing::info!(
        todos = repl.manager().len(),
        completed = repl.manager().completed_count(),
        "Session ended"
    );
    Ok(())
}
