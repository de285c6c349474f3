use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ride-quotes")]
#[command(about = "Cheapest taxi per car type across all configured suppliers")]
pub struct QuoteArgs {
    /// Pickup location as lat,long
    #[arg(allow_hyphen_values = true)]
    pub pickup: Option<String>,

    /// Dropoff location as lat,long
    #[arg(allow_hyphen_values = true)]
    pub dropoff: Option<String>,

    /// Number of passengers (1-16)
    pub passengers: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the per-supplier timeout from config
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "supplier-quotes")]
#[command(about = "List every option offered by a single supplier")]
pub struct SupplierArgs {
    /// Pickup location as lat,long
    #[arg(allow_hyphen_values = true)]
    pub pickup: Option<String>,

    /// Dropoff location as lat,long
    #[arg(allow_hyphen_values = true)]
    pub dropoff: Option<String>,

    /// Supplier name; defaults to the first configured supplier
    #[arg(short, long)]
    pub supplier: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "quote-server")]
#[command(about = "HTTP API serving aggregated taxi quotes")]
pub struct ServerArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the listening port from config
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_coordinates_are_not_flags() {
        let args = QuoteArgs::try_parse_from([
            "ride-quotes",
            "51.470020,-0.454295",
            "-33.86,151.2",
            "3",
            "--timeout-ms",
            "500",
        ])
        .unwrap();

        assert_eq!(args.pickup.as_deref(), Some("51.470020,-0.454295"));
        assert_eq!(args.dropoff.as_deref(), Some("-33.86,151.2"));
        assert_eq!(args.passengers.as_deref(), Some("3"));
        assert_eq!(args.timeout_ms, Some(500));
    }

    #[test]
    fn test_missing_positionals_are_left_to_validation() {
        let args = QuoteArgs::try_parse_from(["ride-quotes", "51.47,-0.45"]).unwrap();
        assert!(args.dropoff.is_none());
        assert!(args.passengers.is_none());
    }
}
