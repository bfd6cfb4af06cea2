// src/lib.rs
//! Job offer analysis: scores an offer (CTC, deductions, notice period,
//! benefits) against market salary data from a third-party lookup API and
//! maps the aggregate score to an Accept / Negotiate / Decline decision.

use anyhow::Result;

pub mod analysis;
pub mod config;
pub mod market_data;
pub mod utils;
pub mod web;

pub use analysis::{AnalysisResult, Decision, InputError, OfferAnalyzer, OfferInput};
pub use config::{AppConfig, MarketApiConfig};
pub use market_data::{MarketDataFetcher, MarketSalary, SalaryLookup};
pub use web::start_web_server;

/// Convenience entry point for validated callers: analyze one offer with the
/// real salary client. Inputs must already be numeric with `ctc > 0`; use
/// [`OfferInput::from_raw`] to validate raw string fields first.
pub async fn analyze_offer(
    config: &MarketApiConfig,
    ctc: f64,
    deductions: f64,
    notice_period: u32,
    benefits: Vec<String>,
    job_title: &str,
    location: &str,
) -> Result<AnalysisResult> {
    anyhow::ensure!(ctc > 0.0, "ctc must be greater than zero");
    anyhow::ensure!(deductions >= 0.0, "deductions must not be negative");

    let analyzer = OfferAnalyzer::from_config(config)?;
    let offer = OfferInput {
        ctc,
        deductions,
        notice_period_days: notice_period,
        benefits,
        job_title: job_title.to_string(),
        location: location.to_string(),
    };

    Ok(analyzer.analyze_offer(&offer).await)
}
