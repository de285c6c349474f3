#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{QuoteArgs, ServerArgs, SupplierArgs};
pub use toml_config::{SupplierConfig, TomlConfig};
