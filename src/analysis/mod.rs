// src/analysis/mod.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod analyzer;
pub mod scorer;

pub use analyzer::OfferAnalyzer;
pub use scorer::score_offer;

use crate::market_data::MarketSalary;
use crate::utils::normalize_benefit_code;

/// One job offer, immutable per analysis. The scorer assumes `ctc > 0`;
/// `from_raw` enforces that at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferInput {
    pub ctc: f64,
    pub deductions: f64,
    pub notice_period_days: u32,
    pub benefits: Vec<String>,
    pub job_title: String,
    pub location: String,
}

/// Client-input rejection, distinct from a computation failure so the web
/// boundary can answer with a 4xx instead of a 500.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("notice_period must be a whole number of days, got {0:?}")]
    InvalidNoticePeriod(String),
    #[error("ctc must be greater than zero")]
    NonPositiveCtc,
    #[error("deductions must not be negative")]
    NegativeDeductions,
}

impl OfferInput {
    /// Parse the raw string fields of the inbound contract. Rejects
    /// non-numeric values, a non-positive ctc, and negative deductions; the
    /// core is never invoked with input it cannot divide by.
    pub fn from_raw(
        ctc: &str,
        deductions: &str,
        notice_period: &str,
        benefits: &[String],
        job_title: &str,
        location: &str,
    ) -> Result<Self, InputError> {
        let ctc_value: f64 = ctc
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidNumber {
                field: "ctc",
                value: ctc.to_string(),
            })?;
        let deductions_value: f64 =
            deductions
                .trim()
                .parse()
                .map_err(|_| InputError::InvalidNumber {
                    field: "deductions",
                    value: deductions.to_string(),
                })?;
        let notice_period_days: u32 = notice_period
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidNoticePeriod(notice_period.to_string()))?;

        if !ctc_value.is_finite() || ctc_value <= 0.0 {
            return Err(InputError::NonPositiveCtc);
        }
        if !deductions_value.is_finite() || deductions_value < 0.0 {
            return Err(InputError::NegativeDeductions);
        }

        Ok(Self {
            ctc: ctc_value,
            deductions: deductions_value,
            notice_period_days,
            benefits: benefits.iter().map(|b| normalize_benefit_code(b)).collect(),
            job_title: job_title.to_string(),
            location: location.to_string(),
        })
    }

    pub fn has_benefit(&self, code: &str) -> bool {
        self.benefits.iter().any(|b| b == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Accept,
    Negotiate,
    Decline,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Accept => write!(f, "Accept"),
            Decision::Negotiate => write!(f, "Negotiate"),
            Decision::Decline => write!(f, "Decline"),
        }
    }
}

/// Full outcome of one analysis, created fresh per request and consumed
/// immediately by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub decision: Decision,
    pub explanation: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub recommendations: Vec<String>,
    pub score: i32,
    pub market_data: Option<MarketSalary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_raw_parses_valid_input() {
        let offer = OfferInput::from_raw(
            "1200000",
            "240000.50",
            "60",
            &codes(&["Health_Insurance", " paid_time_off "]),
            "Software Engineer",
            "Bangalore",
        )
        .unwrap();

        assert_eq!(offer.ctc, 1200000.0);
        assert_eq!(offer.deductions, 240000.50);
        assert_eq!(offer.notice_period_days, 60);
        assert!(offer.has_benefit("health_insurance"));
        assert!(offer.has_benefit("paid_time_off"));
        assert!(!offer.has_benefit("retirement_plan"));
    }

    #[test]
    fn test_from_raw_rejects_non_numeric_fields() {
        assert!(matches!(
            OfferInput::from_raw("abc", "0", "30", &[], "SE", "Pune"),
            Err(InputError::InvalidNumber { field: "ctc", .. })
        ));
        assert!(matches!(
            OfferInput::from_raw("100000", "oops", "30", &[], "SE", "Pune"),
            Err(InputError::InvalidNumber {
                field: "deductions",
                ..
            })
        ));
        assert!(matches!(
            OfferInput::from_raw("100000", "0", "1.5", &[], "SE", "Pune"),
            Err(InputError::InvalidNoticePeriod(_))
        ));
    }

    #[test]
    fn test_from_raw_rejects_non_positive_ctc() {
        assert!(matches!(
            OfferInput::from_raw("0", "0", "30", &[], "SE", "Pune"),
            Err(InputError::NonPositiveCtc)
        ));
        assert!(matches!(
            OfferInput::from_raw("-5", "0", "30", &[], "SE", "Pune"),
            Err(InputError::NonPositiveCtc)
        ));
    }

    #[test]
    fn test_from_raw_rejects_negative_deductions() {
        assert!(matches!(
            OfferInput::from_raw("100000", "-1", "30", &[], "SE", "Pune"),
            Err(InputError::NegativeDeductions)
        ));
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(Decision::Accept.to_string(), "Accept");
        assert_eq!(Decision::Negotiate.to_string(), "Negotiate");
        assert_eq!(Decision::Decline.to_string(), "Decline");
    }
}
