use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bindform::BindError;

/// Request could not be turned into a bound record.
///
/// Always answered with `400 Bad Request`.
#[derive(Debug, thiserror::Error)]
pub enum BindRejection {
    #[error("invalid query string: {0}")]
    Query(String),

    #[error("invalid form body: {0}")]
    Body(String),

    #[error("{0}")]
    Bind(#[from] BindError),
}

impl IntoResponse for BindRejection {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejecting form request");
        (StatusCode::BAD_REQUEST, format!("Bad Request: {self}")).into_response()
    }
}
