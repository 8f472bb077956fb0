use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eval_api::config::Settings;
use eval_api::models::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load()?;
    let state = Arc::new(AppState {
        reports_dir: PathBuf::from(&settings.dir),
    });

    let addr: SocketAddr = settings.bind.parse()?;
    let router = eval_api::build_router(state);

    info!(dir = %settings.dir, "Serving evaluation reports");
    info!("Eval API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
