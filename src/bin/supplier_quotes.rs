use anyhow::Context;
use clap::Parser;
use ride_quotes::adapters::console;
use ride_quotes::utils::{logger, validation, validation::Validate};
use ride_quotes::{ReqwestTransport, SupplierArgs, SupplierClient, SupplierOutcome, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = SupplierArgs::parse();

    logger::init_cli_logger(args.verbose);

    let (Some(pickup), Some(dropoff)) = (args.pickup.as_deref(), args.dropoff.as_deref()) else {
        eprintln!("Usage: supplier-quotes <pickup lat,long> <dropoff lat,long>.");
        std::process::exit(1);
    };

    let coordinates = validation::parse_coordinates(pickup)
        .and_then(|pickup| Ok((pickup, validation::parse_coordinates(dropoff)?)));
    let (pickup, dropoff) = match coordinates {
        Ok(coordinates) => coordinates,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let config = TomlConfig::load(args.config.as_deref())
        .with_context(|| format!("failed to load config {:?}", args.config))?;
    config.validate().context("invalid configuration")?;

    // 未指定時使用設定中的第一家供應商
    let supplier = match args.supplier.as_deref() {
        Some(name) => config
            .find_supplier(name)
            .with_context(|| format!("unknown supplier '{}'", name))?,
        None => config
            .suppliers()
            .into_iter()
            .next()
            .context("no suppliers configured")?,
    };

    let client = SupplierClient::new(ReqwestTransport::new()?, config.timeout());

    match client.fetch_quotes(&supplier, &pickup, &dropoff).await {
        SupplierOutcome::Success(offers) => {
            println!("{}", console::render_supplier_options(&offers));
        }
        SupplierOutcome::Failure(reason) => {
            tracing::warn!("⚠️ {} returned no quotes: {}", supplier.name, reason);
        }
    }

    Ok(())
}
