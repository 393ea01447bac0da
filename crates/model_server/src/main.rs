//! Startup profit prediction service.
//!
//! Serves the linear profit model over HTTP for the dashboard's
//! prediction client.

mod model;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use routes::{health_check, not_found, predict_profit, service_info};
use state::AppState;

/// model-server: startup profit prediction API
#[derive(Parser, Debug)]
#[command(name = "model-server")]
#[command(version, about, long_about = None)]
struct ServerArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Path to the model JSON file
    #[arg(short, long, default_value = "model/startup_model.json")]
    model: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("model_server=info".parse()?))
        .init();

    let args = ServerArgs::parse();

    let state = AppState::load(&args.model);
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the service router. Routes are mounted both at the root and
/// under `/api`.
fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/predict", post(predict_profit));

    Router::new()
        .route("/", get(service_info))
        .merge(api_routes.clone())
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
