// src/analysis/scorer.rs
use super::{AnalysisResult, Decision, OfferInput};
use crate::market_data::MarketSalary;
use crate::utils::format_amount;

const ABOVE_MARKET_FACTOR: f64 = 1.1;
const BELOW_MARKET_FACTOR: f64 = 0.85;
const MAX_DEDUCTION_RATIO: f64 = 0.3;
const MAX_STANDARD_NOTICE_DAYS: u32 = 90;

/// Essential benefits checked against every offer, as (code, display name).
const ESSENTIAL_BENEFITS: [(&str, &str); 3] = [
    ("health_insurance", "Health Insurance"),
    ("retirement_plan", "Retirement Plan"),
    ("paid_time_off", "Paid Time Off"),
];

const ACCEPT_THRESHOLD: i32 = 2;
const NEGOTIATE_THRESHOLD: i32 = -1;

/// Apply the rule set to one offer. Each rule contributes independently to
/// the score and to the pros/cons/recommendations lists; evaluation order is
/// fixed and determines list order. Pure: identical inputs and market data
/// produce identical results. Assumes `offer.ctc > 0`, which the input
/// boundary enforces.
pub fn score_offer(offer: &OfferInput, market: Option<&MarketSalary>) -> AnalysisResult {
    let mut score: i32 = 0;
    let mut pros = Vec::new();
    let mut cons = Vec::new();
    let mut recommendations = Vec::new();

    // Rule 1: salary vs market median, only when market data is available.
    if let Some(market) = market {
        if offer.ctc > market.median_salary * ABOVE_MARKET_FACTOR {
            score += 2;
            pros.push(format!(
                "The offered salary (₹{}) is {:.1}% above the market median of ₹{}",
                format_amount(offer.ctc),
                ((offer.ctc / market.median_salary) - 1.0) * 100.0,
                format_amount(market.median_salary)
            ));
        } else if offer.ctc < market.median_salary * BELOW_MARKET_FACTOR {
            score -= 2;
            cons.push(format!(
                "The offered salary (₹{}) is {:.1}% below the market median of ₹{}",
                format_amount(offer.ctc),
                ((market.median_salary / offer.ctc) - 1.0) * 100.0,
                format_amount(market.median_salary)
            ));
            recommendations.push(format!(
                "Consider negotiating the salary closer to the market range: ₹{} - ₹{}",
                format_amount(market.min_salary),
                format_amount(market.max_salary)
            ));
        }
    }

    // Rule 2: deductions ratio against the 30% ceiling.
    let deduction_pct = (offer.deductions / offer.ctc) * 100.0;
    if offer.deductions > MAX_DEDUCTION_RATIO * offer.ctc {
        score -= 1;
        cons.push(format!(
            "Deductions (₹{}) represent {:.1}% of your CTC, \
             which is higher than the recommended maximum of 30%",
            format_amount(offer.deductions),
            deduction_pct
        ));
        recommendations.push(
            "Request a detailed breakdown of deductions and explore if any can be reduced"
                .to_string(),
        );
    } else {
        pros.push(format!(
            "Deductions are within acceptable range at {:.1}% of CTC",
            deduction_pct
        ));
    }

    // Rule 3: notice period.
    if offer.notice_period_days > MAX_STANDARD_NOTICE_DAYS {
        score -= 1;
        cons.push(format!(
            "Notice period of {} days exceeds the standard 60-90 days",
            offer.notice_period_days
        ));
        recommendations.push(
            "Consider negotiating a shorter notice period to maintain career flexibility"
                .to_string(),
        );
    } else {
        pros.push("Notice period is within industry standard".to_string());
    }

    // Rule 4: essential benefits coverage.
    let present: Vec<&str> = ESSENTIAL_BENEFITS
        .iter()
        .filter(|(code, _)| offer.has_benefit(code))
        .map(|(_, name)| *name)
        .collect();
    let missing: Vec<&str> = ESSENTIAL_BENEFITS
        .iter()
        .filter(|(code, _)| !offer.has_benefit(code))
        .map(|(_, name)| *name)
        .collect();

    if !present.is_empty() {
        pros.push(format!("Offer includes key benefits: {}", present.join(", ")));
    }
    if !missing.is_empty() {
        score -= missing.len() as i32;
        cons.push(format!("Missing important benefits: {}", missing.join(", ")));
        recommendations.push(
            "Discuss the possibility of including additional benefits \
             as part of your compensation package"
                .to_string(),
        );
    }

    let (decision, explanation) = decide(score);

    AnalysisResult {
        decision,
        explanation: explanation.to_string(),
        pros,
        cons,
        recommendations,
        score,
        market_data: market.cloned(),
    }
}

/// Map the aggregate score to a decision. A step function of the score
/// alone, not of which rules fired.
fn decide(score: i32) -> (Decision, &'static str) {
    if score >= ACCEPT_THRESHOLD {
        (
            Decision::Accept,
            "This appears to be a strong offer that exceeds market standards in several areas. \
             The combination of competitive salary and benefits makes it an attractive package.",
        )
    } else if score >= NEGOTIATE_THRESHOLD {
        (
            Decision::Negotiate,
            "While this offer has potential, there are some areas that could be improved through \
             negotiation. Consider discussing the points mentioned in the recommendations.",
        )
    } else {
        (
            Decision::Decline,
            "This offer falls significantly below market standards and may not align with your \
             career goals. Unless there are other compelling factors, you may want to explore \
             other opportunities.",
        )
    }
}
