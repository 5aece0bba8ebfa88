//! The inference engine: raw text → feature vector → calibrated
//! probabilities over {fake, reliable}.
//!
//! Pure function of (loaded artifacts, text). No hidden state, no
//! randomness; identical input always yields identical output.

use newscheck_common::error::{NewscheckError, NewscheckResult};
use serde::Serialize;

use crate::artifacts::{class_label, CLASS_RELIABLE};
use crate::loader::ModelContext;

/// Per-class probability breakdown, in percent, two-decimal rounding.
/// `fake + reliable` is 100.00 within rounding tolerance.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassProbabilities {
    pub fake: f64,
    pub reliable: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Prediction {
    pub label: &'static str,
    pub code: u8,
    /// Probability of the predicted class, in percent.
    pub confidence: f64,
    pub probabilities: ClassProbabilities,
}

/// Classify text against the loaded artifacts.
///
/// The caller trims the text and rejects empty input before this call;
/// the engine only computes. Failures discovered here (width mismatch,
/// non-finite scores) surface as `NewscheckError::Inference` rather than
/// panicking.
pub fn infer(ctx: &ModelContext, text: &str) -> NewscheckResult<Prediction> {
    let vector = ctx.vectorizer.transform(text);

    if vector.len() != ctx.classifier.n_features() {
        return Err(NewscheckError::Inference(format!(
            "feature vector width {} does not match classifier width {}",
            vector.len(),
            ctx.classifier.n_features()
        )));
    }

    let probabilities = ctx.classifier.predict_proba(&vector);
    if !probabilities.iter().all(|p| p.is_finite()) {
        return Err(NewscheckError::Inference(
            "classifier produced a non-finite probability".to_string(),
        ));
    }

    let code = ctx.classifier.predict(&vector);
    let confidence = if code == CLASS_RELIABLE {
        probabilities[1]
    } else {
        probabilities[0]
    };

    Ok(Prediction {
        label: class_label(code),
        code,
        confidence: round2(confidence * 100.0),
        probabilities: ClassProbabilities {
            fake: round2(probabilities[0] * 100.0),
            reliable: round2(probabilities[1] * 100.0),
        },
    })
}

/// Shared input rule for both front-ends: trimmed text must be non-empty
/// and at least `min_chars` long. Each adapter chooses its own minimum
/// (the HTTP API accepts any non-empty text, the dashboard requires 20).
pub fn validate_text(text: &str, min_chars: usize) -> NewscheckResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(NewscheckError::Validation(
            "text must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() < min_chars {
        return Err(NewscheckError::Validation(format!(
            "text is too short (minimum {min_chars} characters)"
        )));
    }
    Ok(trimmed)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
