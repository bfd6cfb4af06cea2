// tests/analyze_api.rs
//! End-to-end tests for the /api/analyze route using rocket's local client
//! and fixture salary lookups instead of real HTTP calls.

use anyhow::{bail, Result};
use async_trait::async_trait;
use offer_analyzer::config::DEFAULT_USD_INR_RATE;
use offer_analyzer::market_data::{SalaryApiResponse, SalaryLookup, SalaryRecord};
use offer_analyzer::web::build_rocket;
use offer_analyzer::OfferAnalyzer;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};

struct FixedSalary {
    median: f64,
    min: f64,
    max: f64,
}

#[async_trait]
impl SalaryLookup for FixedSalary {
    async fn lookup(&self, _job_title: &str, _location: &str) -> Result<SalaryApiResponse> {
        Ok(SalaryApiResponse {
            status: Some("OK".to_string()),
            data: vec![SalaryRecord {
                median_salary: Some(self.median),
                min_salary: Some(self.min),
                max_salary: Some(self.max),
                salary_currency: Some("INR".to_string()),
                salary_period: Some("YEAR".to_string()),
            }],
        })
    }
}

struct UnavailableSalary;

#[async_trait]
impl SalaryLookup for UnavailableSalary {
    async fn lookup(&self, _job_title: &str, _location: &str) -> Result<SalaryApiResponse> {
        bail!("Salary API returned error status 500 Internal Server Error")
    }
}

async fn client_with(lookup: Box<dyn SalaryLookup>) -> Client {
    let analyzer = OfferAnalyzer::with_lookup(lookup, DEFAULT_USD_INR_RATE);
    Client::tracked(build_rocket(analyzer))
        .await
        .expect("valid rocket instance")
}

fn analyze_body(ctc: &str, deductions: &str, notice: &str, benefits: &[&str]) -> String {
    json!({
        "ctc": ctc,
        "deductions": deductions,
        "notice_period": notice,
        "benefits": benefits,
        "job_title": "Software Engineer",
        "location": "Bangalore",
    })
    .to_string()
}

#[rocket::async_test]
async fn analyze_accepts_strong_offer() {
    let client = client_with(Box::new(FixedSalary {
        median: 1000000.0,
        min: 800000.0,
        max: 1600000.0,
    }))
    .await;

    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(analyze_body(
            "1500000",
            "150000",
            "30",
            &["health_insurance", "retirement_plan", "paid_time_off"],
        ))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("json body");

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["job_title"], json!("Software Engineer"));
    assert_eq!(body["result"]["decision"], json!("Accept"));
    assert_eq!(body["result"]["score"], json!(2));
    assert_eq!(body["result"]["market_data"]["median_salary"], json!(1000000.0));
    assert!(body["analyzed_at"].is_string());
}

#[rocket::async_test]
async fn analyze_degrades_when_market_data_unavailable() {
    let client = client_with(Box::new(UnavailableSalary)).await;

    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(analyze_body(
            "100000",
            "10000",
            "30",
            &["health_insurance", "retirement_plan", "paid_time_off"],
        ))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.expect("json body");

    assert_eq!(body["result"]["decision"], json!("Negotiate"));
    assert_eq!(body["result"]["score"], json!(0));
    assert!(body["result"]["market_data"].is_null());

    let pros = body["result"]["pros"].as_array().expect("pros array");
    assert!(!pros
        .iter()
        .any(|p| p.as_str().unwrap_or_default().contains("market median")));
}

#[rocket::async_test]
async fn analyze_rejects_non_numeric_ctc() {
    let client = client_with(Box::new(UnavailableSalary)).await;

    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(analyze_body("abc", "10000", "30", &[]))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap_or_default().contains("ctc"));
}

#[rocket::async_test]
async fn analyze_rejects_zero_ctc() {
    let client = client_with(Box::new(UnavailableSalary)).await;

    let response = client
        .post("/api/analyze")
        .header(ContentType::JSON)
        .body(analyze_body("0", "0", "30", &[]))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body: Value = response.into_json().await.expect("json body");
    assert_eq!(body["success"], json!(false));
}

#[rocket::async_test]
async fn health_returns_ok() {
    let client = client_with(Box::new(UnavailableSalary)).await;

    let response = client.get("/api/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.as_deref(), Some("\"OK\""));
}
