mod cli;
mod commands;
mod format;

use anyhow::{Context, Result};
use clap::Parser;
use tabletfs_core::Navigator;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut navigator = Navigator::load(&cli.host)
        .with_context(|| format!("failed to load documents from {}", cli.host))?;

    let output = commands::execute(&mut navigator, &cli.command)?;
    print!("{output}");
    Ok(())
}
