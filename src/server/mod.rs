//! HTTP surface: one GET route per fetch operation plus a liveness
//! probe. A single generic handler looks the operation up in the
//! registry, applies the per-request deadline, and serializes the
//! resulting table.

pub mod error;

use crate::adapters::PlaidClient;
use crate::app::ops::{registry, FetchContext, FetchOperation};
use crate::config::AppConfig;
use crate::utils::error::{FetchError, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use error::ApiError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::net::TcpListener;

pub struct AppState {
    ctx: FetchContext,
    ops: HashMap<&'static str, Box<dyn FetchOperation>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = PlaidClient::new(&config.plaid)?;
        let ops = registry()
            .into_iter()
            .map(|op| (op.name(), op))
            .collect();
        Ok(Self {
            ctx: FetchContext { client, config },
            ops,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/fetch/{operation}", get(fetch_table))
        .route("/health", get(health))
        .with_state(state)
}

async fn fetch_table(
    Path(operation): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(op) = state.ops.get(operation.as_str()) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("unknown operation: {}", operation)})),
        )
            .into_response();
    };

    tracing::info!("fetching {}", op.name());
    let deadline = Duration::from_secs(state.ctx.config.server.request_timeout_secs);

    // The deadline wraps the whole operation so it also cancels a poller
    // mid-wait, not just individual HTTP calls.
    match tokio::time::timeout(deadline, op.run(&state.ctx)).await {
        Ok(Ok(table)) => {
            tracing::info!("{}: {} rows", op.name(), table.rows.len());
            Json(table).into_response()
        }
        Ok(Err(source)) => ApiError::new(op.name(), source).into_response(),
        Err(_) => ApiError::new(op.name(), FetchError::Deadline(deadline)).into_response(),
    }
}

async fn health() -> Json<serde_json::Value> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    Json(json!({"status": "ok", "timestamp_ms": timestamp_ms}))
}

pub async fn run_server(config: AppConfig) -> Result<()> {
    let port = config.server.port;
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("🚀 fintab listening on http://{}", addr);
    tracing::info!("📊 Tables served from /fetch/{{operation}}");

    axum::serve(listener, app).await?;
    Ok(())
}
