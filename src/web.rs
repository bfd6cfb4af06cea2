// src/web.rs
use crate::analysis::{AnalysisResult, OfferAnalyzer, OfferInput};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::{json::Json, Deserialize, Serialize};
use rocket::{get, post, routes, Build, Request, Response, Rocket, State};
use tracing::{info, warn};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Inbound contract: numeric fields arrive as decimal/integer strings and are
/// validated at this boundary before the core is invoked.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyzeRequest {
    pub ctc: String,
    pub deductions: String,
    pub notice_period: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub job_title: String,
    pub location: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analyzed_at: DateTime<Utc>,
    pub job_title: String,
    pub location: String,
    pub result: AnalysisResult,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[post("/analyze", data = "<request>")]
pub async fn analyze(
    request: Json<AnalyzeRequest>,
    analyzer: &State<OfferAnalyzer>,
) -> Result<Json<AnalyzeResponse>, (Status, Json<ErrorResponse>)> {
    let request = request.into_inner();

    let offer = match OfferInput::from_raw(
        &request.ctc,
        &request.deductions,
        &request.notice_period,
        &request.benefits,
        &request.job_title,
        &request.location,
    ) {
        Ok(offer) => offer,
        Err(e) => {
            warn!("Rejected analyze request: {}", e);
            return Err((
                Status::UnprocessableEntity,
                Json(ErrorResponse {
                    success: false,
                    error: e.to_string(),
                }),
            ));
        }
    };

    let result = analyzer.analyze_offer(&offer).await;

    Ok(Json(AnalyzeResponse {
        success: true,
        analyzed_at: Utc::now(),
        job_title: offer.job_title,
        location: offer.location,
        result,
    }))
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    Json("OK")
}

// Handle OPTIONS requests for CORS preflight
#[rocket::options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

/// Assemble the rocket instance; exposed so the local-client tests can mount
/// the same routes around a fixture analyzer.
pub fn build_rocket(analyzer: OfferAnalyzer) -> Rocket<Build> {
    rocket::build()
        .attach(Cors)
        .manage(analyzer)
        .mount("/api", routes![analyze, health, options])
}

pub async fn start_web_server(analyzer: OfferAnalyzer, port: u16) -> Result<()> {
    info!("Offer analysis API listening on port {}", port);

    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"));

    let _rocket = build_rocket(analyzer)
        .configure(figment)
        .launch()
        .await
        .context("Server failed")?;

    Ok(())
}
