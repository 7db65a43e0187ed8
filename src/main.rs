use anyhow::Context as _;
use ferrum_ctx::{Client, Config, Context};
use std::time::Duration;
use tracing::{error, info};

/// Key written and removed by the round-trip probe
const PROBE_KEY: &str = "ferrum-ctx:probe";

/// Bound on each probe call
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() {
    // Initialize logging (INFO unless RUST_LOG says otherwise)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    if let Err(e) = run().await {
        error!("Probe failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Load the configuration, connect, and check a round trip
async fn run() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path))?;
            Config::from_json(&raw)?
        }
        None => Config::from_env()?,
    };

    info!("Probing {:?}", config);

    let client = Client::connect(&config).await?;
    let probe = client.with_context(Context::background().with_timeout(PROBE_TIMEOUT));

    let pong: String = probe.ping().await.context("PING")?;
    info!("PING -> {}", pong);

    let () = probe.set_ex(PROBE_KEY, "ok", Duration::from_secs(30)).await.context("SET")?;
    let value: Option<String> = probe.get(PROBE_KEY).await.context("GET")?;
    let removed: i64 = probe.del(PROBE_KEY).await.context("DEL")?;

    anyhow::ensure!(
        value.as_deref() == Some("ok"),
        "round trip returned {:?}",
        value
    );
    info!("Round trip ok ({} key removed)", removed);

    Ok(())
}
