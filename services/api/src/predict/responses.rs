use newscheck_model::engine::Prediction;
use serde::Serialize;

/// How many characters of the original text the response echoes back.
pub const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Serialize)]
pub struct ProbabilitiesBody {
    pub fake: f64,
    pub reliable: f64,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: &'static str,
    pub prediction_code: u8,
    pub confidence: f64,
    pub probabilities: ProbabilitiesBody,
    pub text_length: usize,
    pub text_preview: String,
}

impl PredictResponse {
    /// `original` is the caller's untrimmed text: length and preview are
    /// reported over what was actually sent.
    pub fn new(prediction: Prediction, original: &str) -> Self {
        Self {
            prediction: prediction.label,
            prediction_code: prediction.code,
            confidence: prediction.confidence,
            probabilities: ProbabilitiesBody {
                fake: prediction.probabilities.fake,
                reliable: prediction.probabilities.reliable,
            },
            text_length: original.chars().count(),
            text_preview: preview(original, PREVIEW_CHARS),
        }
    }
}

/// First `limit` characters, ellipsis-suffixed only when truncated.
pub fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let head: String = text.chars().take(limit).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_text_unchanged() {
        let text = "a".repeat(100);
        assert_eq!(preview(&text, 100), text);
    }

    #[test]
    fn preview_truncates_long_text_with_ellipsis() {
        let text = "b".repeat(150);
        let out = preview(&text, 100);
        assert_eq!(out.chars().count(), 103);
        assert!(out.ends_with("..."));
        assert!(out.starts_with(&"b".repeat(100)));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "é".repeat(101);
        let out = preview(&text, 100);
        assert_eq!(out.chars().count(), 103);
    }
}
