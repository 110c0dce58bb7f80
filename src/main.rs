use boc_rate_chart::server::{self, config::ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = ServerConfig::from_env();
    if let Err(e) = server::serve(cfg).await {
        tracing::error!("Server failed: {e}");
        std::process::exit(1);
    }
}
