use crate::utils::error::FetchError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// A fetch failure tagged with the operation it came from, ready to be
/// rendered as an HTTP response.
///
/// Upstream domain errors pass through verbatim with a 400; transport
/// failures surface as 502 because the collaborator was unreachable
/// rather than rejecting the request; poll exhaustion and deadline
/// overruns are timeout-class 504s; everything else is a 500.
pub struct ApiError {
    pub operation: String,
    pub source: FetchError,
}

impl ApiError {
    pub fn new(operation: impl Into<String>, source: FetchError) -> Self {
        Self {
            operation: operation.into(),
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.source {
            FetchError::Plaid(error) => {
                tracing::error!(
                    "{}: {}",
                    self.operation,
                    serde_json::to_string(error).unwrap_or_else(|_| error.to_string())
                );
                (StatusCode::BAD_REQUEST, Json(error.clone())).into_response()
            }
            FetchError::PollTimeout { .. } | FetchError::Deadline(_) => {
                tracing::error!("{}: {}", self.operation, self.source);
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    Json(json!({"error": self.source.to_string()})),
                )
                    .into_response()
            }
            FetchError::Transport(_) | FetchError::UpstreamStatus { .. } => {
                tracing::error!("{}: {}", self.operation, self.source);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({"error": self.source.to_string()})),
                )
                    .into_response()
            }
            _ => {
                tracing::error!("{}: {}", self.operation, self.source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": self.source.to_string()})),
                )
                    .into_response()
            }
        }
    }
}
