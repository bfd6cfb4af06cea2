// src/analysis/analyzer.rs
use anyhow::Result;
use tracing::info;

use super::{score_offer, AnalysisResult, OfferInput};
use crate::config::MarketApiConfig;
use crate::market_data::{MarketDataFetcher, SalaryLookup};

/// Ties the market-data fetch to the rule engine: one analysis is a single
/// synchronous chain of fetch-then-score with no shared state between
/// invocations.
pub struct OfferAnalyzer {
    fetcher: MarketDataFetcher,
}

impl OfferAnalyzer {
    pub fn new(fetcher: MarketDataFetcher) -> Self {
        Self { fetcher }
    }

    /// Wire up the real RapidAPI salary client.
    pub fn from_config(config: &MarketApiConfig) -> Result<Self> {
        Ok(Self::new(MarketDataFetcher::from_config(config)?))
    }

    /// Analyzer backed by an injected lookup, for tests and fixtures.
    pub fn with_lookup(lookup: Box<dyn SalaryLookup>, usd_inr_rate: f64) -> Self {
        Self::new(MarketDataFetcher::new(lookup, usd_inr_rate))
    }

    /// Fetch market data for the offer's title and location, then score. A
    /// failed fetch degrades to scoring without the market comparison.
    pub async fn analyze_offer(&self, offer: &OfferInput) -> AnalysisResult {
        info!(
            "Analyzing offer for {} in {}",
            offer.job_title, offer.location
        );

        let market = self
            .fetcher
            .fetch(&offer.job_title, &offer.location)
            .await;

        let result = score_offer(offer, market.as_ref());

        info!(
            "Offer for {} in {} scored {} ({})",
            offer.job_title, offer.location, result.score, result.decision
        );

        result
    }
}
