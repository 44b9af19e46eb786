//! hostfacts fact agent — derives the cloud provider fact for one host.
//!
//! Reads a parsed host snapshot, classifies it, and prints a JSON fact
//! report on stdout. Logs go to stderr.

use tracing_subscriber::EnvFilter;

use hf_fact_agent::config::{AgentConfig, LogFormat};
use hf_fact_agent::report;
use hf_fact_agent::source::FileSnapshotSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/etc/hostfacts/agent.toml".to_string());

    let config = AgentConfig::from_file(&config_path)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Plain => subscriber.init(),
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        snapshot = %config.snapshot_path,
        "hf-fact-agent starting"
    );

    // ── Classify ────────────────────────────────────────────────
    let fact = report::run(&config, &FileSnapshotSource).await?;
    println!("{}", report::render(&fact, config.output.pretty)?);

    Ok(())
}
