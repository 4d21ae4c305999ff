use crate::core::{AppError, Result};
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::configuration(format!("Invalid LOG_FORMAT: {}", s))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
            },
            server: ServerConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "Worker count must be greater than 0",
            ));
        }

        if self.server.max_payload_bytes == 0 {
            return Err(AppError::configuration(
                "Payload limit must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Default tracing filter when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> String {
        format!("nairatax={},actix_web=info", self.app.log_level)
    }
}
