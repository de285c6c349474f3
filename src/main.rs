use clap::Parser;
use ride_quotes::adapters::console;
use ride_quotes::utils::{logger, validation, validation::Validate};
use ride_quotes::{Aggregator, QuoteArgs, ReqwestTransport, SupplierClient, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = QuoteArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::debug!("CLI args: {:?}", args);

    // 驗證輸入
    let request = match validation::validate_query(
        args.pickup.as_deref(),
        args.dropoff.as_deref(),
        args.passengers.as_deref(),
    ) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 載入並驗證配置
    let mut config = match TomlConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Some(timeout_ms) = args.timeout_ms {
        config.aggregator.timeout_ms = timeout_ms;
        tracing::info!("🔧 Supplier timeout overridden to: {}ms", timeout_ms);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let transport = ReqwestTransport::new()?;
    let aggregator = Aggregator::new(SupplierClient::new(transport, config.timeout()));

    let offers = aggregator.aggregate(request, &config.suppliers()).await;
    println!("{}", console::render_offers(&offers));

    Ok(())
}
