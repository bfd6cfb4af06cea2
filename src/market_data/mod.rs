// src/market_data/mod.rs
use serde::{Deserialize, Serialize};

pub mod fetcher;
pub mod types;

pub use fetcher::{MarketDataFetcher, RapidApiSalaryClient, SalaryLookup};
pub use types::{SalaryApiResponse, SalaryRecord};

/// All market figures are normalized into this currency before comparison.
pub const CANONICAL_CURRENCY: &str = "INR";

/// Market salary figures for a job title and location, normalized to the
/// canonical currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSalary {
    pub median_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub currency: String,
    pub period: String,
}
