//! Configuration management for Biblio server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use validator::Validate;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Lending rules applied by the loan engine
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct LoansConfig {
    #[validate(range(min = 1, max = 3650, message = "Loan duration must be 1 to 3650 days"))]
    pub loan_duration_days: i64,
    #[validate(range(min = 1, message = "At least one active loan must be allowed"))]
    pub max_active_loans: usize,
    #[validate(range(min = 0, max = 365, message = "Penalty must be 0 to 365 days per late day"))]
    pub penalty_days_per_late_day: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Load the demo catalog at start-up
    pub demo_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub loans: LoansConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BIBLIO_)
            .add_source(
                Environment::with_prefix("BIBLIO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the loan engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.loans
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid loans configuration: {}", e)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            loan_duration_days: 30,
            max_active_loans: 3,
            penalty_days_per_late_day: 2,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: true }
    }
}
