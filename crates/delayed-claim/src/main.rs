// File: crates/delayed-claim/src/main.rs
// Summary: Renders delayed_claim_er_change.png into the current directory.

use anyhow::{Context, Result};
use delayed_claim::{generate, GeneratorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::default();
    generate(&config)
        .with_context(|| format!("failed to generate {}", config.output.display()))?;
    Ok(())
}
