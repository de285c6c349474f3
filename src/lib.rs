pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{QuoteArgs, ServerArgs, SupplierArgs};

pub use adapters::http::ReqwestTransport;
pub use config::TomlConfig;
pub use core::{aggregator::Aggregator, supplier_client::SupplierClient};
pub use domain::model::{AggregationRequest, CarType, Coordinates, Offer, Supplier, SupplierOutcome};
pub use utils::error::{QuoteError, Result};
