use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_patterns::{demo, PipelineConfig};

fn main() -> anyhow::Result<()> {
    let config = PipelineConfig::default();

    // Default to the configured filter, override with RUST_LOG
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
        )
        .init();

    tracing::info!("🚀 Starting order pattern walkthrough");

    demo::run_all(&config)?;

    tracing::info!("🎉 Demo complete!");
    Ok(())
}
