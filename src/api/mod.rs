// ============================================================
// Layer 0 — HTTP API (axum)
// ============================================================
// Exposes the two use cases over HTTP:
//
//   POST /train    multipart `csvfile` → TrainReport
//   POST /predict  multipart `csvfile` → PredictionReport
//
// Shared state is built once at startup and cloned into each
// request:
//   - the expected feature list (read-only)
//   - the forest hyperparameters (read-only)
//   - the model store (file + lock)
//
// Cross-origin requests are allowed from any origin.
//
// Reference: axum documentation, tower-http CorsLayer

pub mod error;
pub mod handlers;
pub mod upload;


use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::{path::PathBuf, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::data::feature_list::load_expected_features;
use crate::domain::schema::{ExpectedFeatures, FeatureSchema};
use crate::infra::model_store::ModelStore;
use crate::ml::model::ForestConfig;

// ─── Server Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host:             String,
    pub port:             u16,
    pub features_file:    PathBuf,
    pub model_path:       PathBuf,
    pub max_upload_bytes: usize,
    pub forest:           ForestConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host:             "127.0.0.1".to_string(),
            port:             5001,
            features_file:    PathBuf::from("features.txt"),
            model_path:       PathBuf::from("random_forest_regressor.bin"),
            max_upload_bytes: 16 * 1024 * 1024,
            forest:           ForestConfig::default(),
        }
    }
}

// ─── Shared State ─────────────────────────────────────────────────────────────
#[derive(Clone)]
pub struct AppState {
    pub features: Arc<ExpectedFeatures>,
    pub forest:   ForestConfig,
    pub store:    ModelStore,
}

impl AppState {
    pub fn new(features: ExpectedFeatures, forest: ForestConfig, store: ModelStore) -> Self {
        Self {
            features: Arc::new(features),
            forest,
            store,
        }
    }
}

/// Build the router with CORS, request tracing and the upload limit.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/train", post(handlers::train))
        .route("/predict", post(handlers::predict))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Load startup state, bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    // A missing feature list stops the process here
    let features = load_expected_features(&config.features_file, &FeatureSchema::service())?;
    let store    = ModelStore::new(&config.model_path);
    tracing::info!("Model path: '{}'", store.path().display());

    let app = router(
        AppState::new(features, config.forest.clone(), store),
        config.max_upload_bytes,
    );

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Cannot bind {}:{}", config.host, config.port))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
