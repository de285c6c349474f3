use crate::core::supplier_client::DEFAULT_TIMEOUT_MS;
use crate::domain::model::Supplier;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SUPPLIER_BASE_URL: &str = "https://techtest.rideways.com";
pub const DEFAULT_SUPPLIER_NAMES: [&str; 3] = ["Dave", "Eric", "Jeff"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub aggregator: AggregatorConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default = "default_suppliers")]
    pub suppliers: Vec<SupplierConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub json_logs: bool,
}

/// 供應商設定；陣列順序即為平手時的優先順序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierConfig {
    pub name: String,
    pub label: Option<String>,
    pub endpoint: Option<String>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_suppliers() -> Vec<SupplierConfig> {
    DEFAULT_SUPPLIER_NAMES
        .iter()
        .map(|name| SupplierConfig {
            name: name.to_string(),
            label: None,
            endpoint: None,
        })
        .collect()
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            json_logs: false,
        }
    }
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            aggregator: AggregatorConfig::default(),
            server: ServerConfig::default(),
            suppliers: default_suppliers(),
        }
    }
}

impl SupplierConfig {
    pub fn to_supplier(&self) -> Supplier {
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| format!("{}'s Taxis", self.name));
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("{}/{}", DEFAULT_SUPPLIER_BASE_URL, self.name));
        Supplier::new(self.name.clone(), label, endpoint)
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 有指定檔案就讀檔，否則使用內建的三家供應商
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${SUPPLIER_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuoteError::ConfigError {
            message: format!("env substitution pattern failed to compile: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 依設定順序展開的供應商清單
    pub fn suppliers(&self) -> Vec<Supplier> {
        self.suppliers.iter().map(SupplierConfig::to_supplier).collect()
    }

    pub fn find_supplier(&self, name: &str) -> Option<Supplier> {
        self.suppliers
            .iter()
            .find(|supplier| supplier.name.eq_ignore_ascii_case(name))
            .map(SupplierConfig::to_supplier)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.aggregator.timeout_ms)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if self.suppliers.is_empty() {
            return Err(QuoteError::ConfigError {
                message: "at least one supplier must be configured".to_string(),
            });
        }

        validation::validate_positive_number("aggregator.timeout_ms", self.aggregator.timeout_ms, 1)?;
        validation::validate_positive_number("server.port", u64::from(self.server.port), 1)?;
        validation::validate_non_empty_string("server.host", &self.server.host)?;

        for supplier in &self.suppliers {
            validation::validate_non_empty_string("suppliers.name", &supplier.name)?;
        }
        validation::validate_unique_names(
            "suppliers.name",
            self.suppliers.iter().map(|s| s.name.as_str()),
        )?;

        for supplier in self.suppliers() {
            validation::validate_url("suppliers.endpoint", &supplier.endpoint)?;
        }

        Ok(())
    }
}
