mod error;
mod predict;

use axum::extract::State;
use axum::http::{header, Method};
use axum::routing::get;
use axum::{Json, Router};
use newscheck_common::types::ServiceInfo;
use newscheck_config::{init_tracing, AppConfig};
use newscheck_model::loader::{ArtifactPaths, ModelContext};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    /// Immutable model handles, shared read-only with every request.
    /// `None` only when no load has happened (health probes in tests);
    /// `main` refuses to serve without a successful load.
    pub model: Option<Arc<ModelContext>>,
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model_loaded": state.model.is_some(),
        "message": "Newscheck Fake News Detector API is running",
    }))
}

async fn home() -> Json<serde_json::Value> {
    let service = ServiceInfo::new(
        "Newscheck Fake News Detector API",
        "Binary fake-vs-reliable news classification over a pre-trained model",
    );
    Json(serde_json::json!({
        "name": service.name,
        "version": service.version,
        "description": service.description,
        "endpoints": {
            "health": {
                "method": "GET",
                "url": "/health",
                "description": "Check API status",
            },
            "predict": {
                "method": "POST",
                "url": "/predict",
                "description": "Classify an article as fake or reliable",
                "body": { "text": "Article text to analyze" },
            },
        },
        "example": {
            "url": "http://localhost:5000/predict",
            "method": "POST",
            "body": { "text": "Breaking news: Major event happened today" },
        },
    }))
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .merge(predict::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);
    tracing::info!(service = "newscheck-api", "starting");

    let paths = ArtifactPaths::new(&config.model_dir);
    let model = match ModelContext::load(&paths) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            // Serving without a model is meaningless; refuse to start.
            tracing::error!(error = %e, "cannot start without model artifacts");
            std::process::exit(1);
        }
    };

    let state = AppState { model: Some(model) };
    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
