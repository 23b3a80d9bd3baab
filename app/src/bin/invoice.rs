//! Terminal invoice generator.
//!
//! Reads the purchase details from stdin, shows the invoice, and writes
//! `invoice.png` to the configured download directory.

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use laptop_invoice_lib::InvoiceComponent;
use laptop_invoice_lib::services::Services;
use laptop_invoice_lib::session::run_session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting invoice generator");

    let config = laptop_invoice_lib::init_foundation();
    let mut component = InvoiceComponent::new(Services::from_config(&config));

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        result = run_session(&mut component, &config.shop_name, stdin, stdout) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("Shutting down..."),
    }

    Ok(())
}
