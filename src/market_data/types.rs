// src/market_data/types.rs
use serde::Deserialize;

// Wire shapes of the salary lookup API. Every salary field is optional so a
// missing field becomes a validation reason instead of a deserialization
// failure.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryApiResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Vec<SalaryRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryRecord {
    #[serde(default)]
    pub median_salary: Option<f64>,
    #[serde(default)]
    pub min_salary: Option<f64>,
    #[serde(default)]
    pub max_salary: Option<f64>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub salary_period: Option<String>,
}
