use anyhow::Context;
use clap::Parser;
use ride_quotes::adapters::api::{self, AppState};
use ride_quotes::utils::{logger, validation::Validate};
use ride_quotes::{Aggregator, ReqwestTransport, ServerArgs, SupplierClient, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    let mut config = TomlConfig::load(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;

    if let Some(port) = args.port {
        config.server.port = port;
    }

    logger::init_server_logger(args.json_logs || config.server.json_logs);

    config.validate().context("invalid configuration")?;

    let suppliers = config.suppliers();
    tracing::info!(
        "🚀 Aggregating over {} suppliers: {}",
        suppliers.len(),
        suppliers
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let transport = ReqwestTransport::new()?;
    let aggregator = Aggregator::new(SupplierClient::new(transport, config.timeout()));
    let state = AppState::new(aggregator, suppliers);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!("App listening on {}", address);
    api::serve(listener, state).await?;

    Ok(())
}
