use anyhow::Result;
use std::path::Path;
use tracing::error;
use tracing_subscriber::EnvFilter;
use weathertop::{WeathertopConfig, pipeline};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = WeathertopConfig::load()?;
    pipeline::run(config, Path::new("."))?;
    println!("Process Completed");
    Ok(())
}
