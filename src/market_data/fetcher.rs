// src/market_data/fetcher.rs
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use super::types::{SalaryApiResponse, SalaryRecord};
use super::{MarketSalary, CANONICAL_CURRENCY};
use crate::config::MarketApiConfig;

/// Capability: look up market salary figures by job title and location.
/// Abstracted so tests can inject deterministic fixtures instead of
/// performing real HTTP calls.
#[async_trait]
pub trait SalaryLookup: Send + Sync {
    async fn lookup(&self, job_title: &str, location: &str) -> Result<SalaryApiResponse>;
}

/// Real client for the RapidAPI job-salary endpoint.
pub struct RapidApiSalaryClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl RapidApiSalaryClient {
    pub fn new(config: &MarketApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
        })
    }
}

#[async_trait]
impl SalaryLookup for RapidApiSalaryClient {
    async fn lookup(&self, job_title: &str, location: &str) -> Result<SalaryApiResponse> {
        info!("Calling salary API: {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .query(&[
                ("job_title", job_title),
                ("location", location),
                ("location_type", "CITY"),
                ("years_of_experience", "ALL"),
            ])
            .send()
            .await
            .context("Failed to send request to salary API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read salary API response body")?;

        if !status.is_success() {
            bail!("Salary API returned error status {}: {}", status, body);
        }

        serde_json::from_str(&body).context("Failed to parse salary API response as JSON")
    }
}

/// Fetches market data and collapses every failure into absence. A lookup
/// error, a non-OK payload, or a record missing required fields all degrade
/// the analysis rather than abort it.
pub struct MarketDataFetcher {
    lookup: Box<dyn SalaryLookup>,
    usd_inr_rate: f64,
}

impl MarketDataFetcher {
    pub fn new(lookup: Box<dyn SalaryLookup>, usd_inr_rate: f64) -> Self {
        Self {
            lookup,
            usd_inr_rate,
        }
    }

    pub fn from_config(config: &MarketApiConfig) -> Result<Self> {
        Ok(Self::new(
            Box::new(RapidApiSalaryClient::new(config)?),
            config.usd_inr_rate,
        ))
    }

    /// Never raises to the caller: the reason for missing data is logged and
    /// the analysis proceeds without the market comparison.
    pub async fn fetch(&self, job_title: &str, location: &str) -> Option<MarketSalary> {
        match self.try_fetch(job_title, location).await {
            Ok(market) => {
                info!(
                    "Market data for {} in {}: median {} {}",
                    job_title, location, market.median_salary, market.currency
                );
                Some(market)
            }
            Err(e) => {
                warn!("No market data for {} in {}: {:#}", job_title, location, e);
                None
            }
        }
    }

    async fn try_fetch(&self, job_title: &str, location: &str) -> Result<MarketSalary> {
        let body = self.lookup.lookup(job_title, location).await?;
        validate_response(&body, self.usd_inr_rate)
    }
}

/// Validate the API payload and normalize its first record. Only the first
/// entry is consulted; ordering of further results is ignored.
pub(crate) fn validate_response(
    body: &SalaryApiResponse,
    usd_inr_rate: f64,
) -> Result<MarketSalary> {
    match body.status.as_deref() {
        Some("OK") => {}
        other => bail!("salary API returned non-OK status: {:?}", other),
    }

    let record = body
        .data
        .first()
        .context("no salary data found for the given job title and location")?;

    normalize_record(record, usd_inr_rate)
}

fn normalize_record(record: &SalaryRecord, usd_inr_rate: f64) -> Result<MarketSalary> {
    let median_salary = record.median_salary.context("response missing median_salary")?;
    let min_salary = record.min_salary.context("response missing min_salary")?;
    let max_salary = record.max_salary.context("response missing max_salary")?;
    let currency = record
        .salary_currency
        .as_deref()
        .context("response missing salary_currency")?;
    let period = record
        .salary_period
        .clone()
        .context("response missing salary_period")?;

    if currency == CANONICAL_CURRENCY {
        return Ok(MarketSalary {
            median_salary,
            min_salary,
            max_salary,
            currency: currency.to_string(),
            period,
        });
    }

    // Best-effort conversion with a static approximate rate.
    Ok(MarketSalary {
        median_salary: median_salary * usd_inr_rate,
        min_salary: min_salary * usd_inr_rate,
        max_salary: max_salary * usd_inr_rate,
        currency: CANONICAL_CURRENCY.to_string(),
        period,
    })
}
