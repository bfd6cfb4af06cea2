use anyhow::Result;
use clap::Parser;
use offer_analyzer::{start_web_server, AppConfig, OfferAnalyzer};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "offerlens", about = "Job offer analysis API server")]
struct Args {
    /// Port to listen on; overrides the PORT environment variable
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let port = args.port.unwrap_or(config.server.port);

    info!("Starting Offer Analysis API Server");
    info!("Salary API: {}", config.market.base_url);
    info!("USD to INR rate: {}", config.market.usd_inr_rate);
    info!("Server: http://0.0.0.0:{}", port);

    let analyzer = OfferAnalyzer::from_config(&config.market)?;
    start_web_server(analyzer, port).await
}
