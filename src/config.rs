// src/config.rs
//! Environment-driven configuration. The fetcher receives its settings at
//! construction instead of reading ambient globals, so tests can run against
//! fake credentials and endpoints.

use anyhow::{Context, Result};

pub const DEFAULT_SALARY_API_URL: &str = "https://job-salary-data.p.rapidapi.com/job-salary";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Static USD to INR approximation, not a live forex rate.
pub const DEFAULT_USD_INR_RATE: f64 = 90.0;
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub market: MarketApiConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct MarketApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    pub timeout_seconds: u64,
    pub usd_inr_rate: f64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl AppConfig {
    /// Load all configuration from the environment. API credentials are
    /// required; everything else falls back to a default.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            market: MarketApiConfig::from_env()?,
            server: ServerConfig::from_env()?,
        })
    }
}

impl MarketApiConfig {
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("RAPID_API_KEY").context("RAPID_API_KEY environment variable not set")?;
        let api_host = std::env::var("RAPID_API_HOST")
            .context("RAPID_API_HOST environment variable not set")?;

        let base_url = std::env::var("SALARY_API_URL")
            .unwrap_or_else(|_| DEFAULT_SALARY_API_URL.to_string());

        let timeout_seconds = match std::env::var("SALARY_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("SALARY_API_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let usd_inr_rate = match std::env::var("USD_INR_RATE") {
            Ok(raw) => raw.parse::<f64>().context("USD_INR_RATE must be a number")?,
            Err(_) => DEFAULT_USD_INR_RATE,
        };

        Ok(Self {
            base_url,
            api_key,
            api_host,
            timeout_seconds,
            usd_inr_rate,
        })
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { port })
    }
}
