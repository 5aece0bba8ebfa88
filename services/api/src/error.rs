use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use newscheck_common::error::NewscheckError;

pub enum ApiError {
    /// A required request field was absent; the response carries an
    /// example payload so the caller can correct the request.
    MissingField(&'static str),
    Domain(NewscheckError),
}

impl ApiError {
    pub fn missing_text() -> Self {
        Self::MissingField("text")
    }
}

impl From<NewscheckError> for ApiError {
    fn from(err: NewscheckError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "error": format!("the `{field}` field is required"),
                    "example": { "text": "Your article text here" },
                }),
            ),
            ApiError::Domain(NewscheckError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": msg }),
            ),
            ApiError::Domain(NewscheckError::Inference(msg)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "prediction failed", "details": msg }),
            ),
            ApiError::Domain(other) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": other.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
