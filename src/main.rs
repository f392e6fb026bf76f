use anyhow::{Context, Result};
use clap::Parser;
use mockgen::cli::Cli;
use mockgen::config::load_config;
use mockgen::io::RealFileSystem;
use mockgen::observability::init_tracing;
use mockgen::pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Ok(cwd) = std::env::current_dir() {
        tracing::debug!(cwd = %cwd.display(), "Working directory");
    }

    let config = load_config().context("Failed to load configuration")?;
    let request = cli.request();

    pipeline::run(&request, &config, &RealFileSystem::new())
        .with_context(|| format!("Failed to generate mocks for {}", request.source.display()))?;

    Ok(())
}
