use anyhow::Result;
use log::warn;
use porkbun::{config, inventory::Inventory};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = config::load(&path)?;

    // Ctrl-C cancels whatever request is in flight
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling");
            on_interrupt.cancel();
        }
    });

    let inventory = Inventory::from_config(config)?;
    let report = inventory.run(&cancel).await?;
    report.log();
    Ok(())
}
