//! Terminal route-finding demo.
//!
//! Run: cargo run --bin gridroute -- --maze --algorithm all
//!
//! Set `RUST_LOG=debug` to see search and maze logs.

use clap::Parser;
use gridroute_demos::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    gridroute_demos::execute(&cli, &mut stdout.lock())?;
    Ok(())
}
