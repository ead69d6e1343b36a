use crate::utils::error::{CleanerError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use std::net::SocketAddr;

#[derive(Debug, Clone, Parser)]
#[command(name = "robot-cleaner")]
#[command(about = "Counts the unique places a cleaning robot visits and records each run")]
pub struct CliConfig {
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub bind_addr: String,

    /// Postgres connection string; falls back to DATABASE_URL. Only takes
    /// effect with the postgres build feature, otherwise executions stay in
    /// memory.
    #[arg(long)]
    pub database_url: Option<String>,

    #[arg(long, help = "Enforce API token authentication")]
    pub production: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Runtime configuration: CLI flags merged with the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub is_production: bool,
    pub auth_api_key: String,
}

impl AppConfig {
    /// Merge CLI flags with the environment (`.env` is loaded by main).
    /// Flags win over environment variables.
    pub fn load(cli: &CliConfig) -> Self {
        let database_url = cli
            .database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok());
        let is_production = cli.production
            || matches!(
                std::env::var("IS_PRODUCTION").as_deref(),
                Ok("True") | Ok("true") | Ok("1")
            );
        let auth_api_key = std::env::var("AUTH_API_KEY").unwrap_or_default();

        Self {
            bind_addr: cli.bind_addr.clone(),
            database_url,
            is_production,
            auth_api_key,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(CleanerError::InvalidValue {
                field: "bind_addr".to_string(),
                value: self.bind_addr.clone(),
                reason: "not a valid socket address".to_string(),
            });
        }

        // an unauthenticated production deployment is a misconfiguration
        if self.is_production {
            validate_non_empty_string("AUTH_API_KEY", &self.auth_api_key)
                .map_err(|_| CleanerError::ConfigError {
                    message: "AUTH_API_KEY must be set when running in production".to_string(),
                })?;
        }

        Ok(())
    }
}
