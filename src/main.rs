use clap::Parser;
use tracing_subscriber::EnvFilter;
use unicrm_api::cli::Cli;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if let Err(e) = unicrm_api::cli::run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
