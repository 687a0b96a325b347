//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Finance configuration.
    #[serde(default)]
    pub finance: FinanceConfig,
    /// Scheme catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Finance configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FinanceConfig {
    /// The financial year the application currently operates in,
    /// e.g. "2025-2026".
    #[serde(default = "default_financial_year")]
    pub financial_year: String,
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            financial_year: default_financial_year(),
        }
    }
}

fn default_financial_year() -> String {
    "2025-2026".to_string()
}

/// Scheme catalog configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the scheme catalog file (TOML/JSON), relative to the
    /// working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "config/schemes".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NIDHI").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig {
            finance: FinanceConfig::default(),
            catalog: CatalogConfig::default(),
        };
        assert_eq!(config.finance.financial_year, "2025-2026");
        assert_eq!(config.catalog.path, "config/schemes");
    }

    #[test]
    fn test_env_override() {
        temp_env::with_var("NIDHI__FINANCE__FINANCIAL_YEAR", Some("2026-2027"), || {
            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.finance.financial_year, "2026-2027");
        });
    }
}
