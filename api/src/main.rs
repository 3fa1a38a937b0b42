use api::routes::routes;
use api::state::AppState;
use common::config::AppConfig;
use common::logger::init_logging;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let _log_guard = init_logging(&config, "logs");

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to build grading client");
            std::process::exit(1);
        }
    };
    if !config.has_gemini_api_key() {
        warn!("GEMINI_API_KEY is not set; grading endpoints will answer 500");
    }

    let shutdown = state.shutdown_token();
    let app = routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST and PORT must form a socket address");
    let listener = TcpListener::bind(addr).await.expect("Failed to bind");

    info!(
        "{} listening on http://{} (model {})",
        config.project_name, addr, config.gemini_model
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .expect("Server crashed");
}

async fn shutdown_signal(shutdown: CancellationToken) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested; interrupting running exams");
    }
    shutdown.cancel();
}
