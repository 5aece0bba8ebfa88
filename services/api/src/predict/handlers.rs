use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use newscheck_common::error::NewscheckError;
use newscheck_model::engine::{infer, validate_text};

use crate::error::ApiError;
use crate::AppState;

use super::requests::PredictRequest;
use super::responses::{preview, PredictResponse};

pub async fn post_predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| {
        ApiError::from(NewscheckError::Validation(format!(
            "request body must be valid JSON: {e}"
        )))
    })?;

    let Some(model) = state.model.as_ref() else {
        return Err(NewscheckError::Internal(
            "model not loaded; restart the server".to_string(),
        )
        .into());
    };

    let Some(text) = body.text.as_deref() else {
        return Err(ApiError::missing_text());
    };

    let trimmed = validate_text(text, 1)?;
    let prediction = infer(model, trimmed)?;

    tracing::info!(
        preview = %preview(trimmed, 50),
        label = prediction.label,
        confidence = prediction.confidence,
        "prediction served"
    );

    Ok(Json(PredictResponse::new(prediction, text)))
}
