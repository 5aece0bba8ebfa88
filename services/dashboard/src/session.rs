//! Interactive session state: the last analyzed text and its result.
//! Nothing here is shared across sessions except the read-only model
//! handles.

use newscheck_common::error::NewscheckResult;
use newscheck_model::engine::{infer, validate_text, Prediction};
use newscheck_model::loader::ModelContext;
use std::sync::Arc;

/// The dashboard asks for more than the HTTP API does: a couple of words
/// rarely carry enough signal to be worth showing a verdict for.
pub const MIN_ARTICLE_CHARS: usize = 20;

/// Canned articles for the `:examples` command, with the expected verdict.
pub const EXAMPLE_ARTICLES: &[(&str, &str)] = &[
    ("SHOCKING: Aliens landed in New York City yesterday!!!", "Fake"),
    (
        "President announces new economic policy at White House press conference",
        "Reliable",
    ),
    (
        "UNBELIEVABLE: Doctors don't want you to know this miracle cure!!!",
        "Fake",
    ),
    (
        "Scientists at Harvard Medical School publish peer-reviewed study on cancer research",
        "Reliable",
    ),
];

pub struct Session {
    ctx: Arc<ModelContext>,
    last_text: Option<String>,
    last_prediction: Option<Prediction>,
}

impl Session {
    pub fn new(ctx: Arc<ModelContext>) -> Self {
        Self {
            ctx,
            last_text: None,
            last_prediction: None,
        }
    }

    /// Validate and classify an article, remembering it as the session's
    /// last result. Rejected input leaves the previous result in place.
    pub fn analyze(&mut self, input: &str) -> NewscheckResult<Prediction> {
        let trimmed = validate_text(input, MIN_ARTICLE_CHARS)?;
        let prediction = infer(&self.ctx, trimmed)?;
        self.last_text = Some(trimmed.to_string());
        self.last_prediction = Some(prediction.clone());
        Ok(prediction)
    }

    pub fn last(&self) -> Option<(&str, &Prediction)> {
        match (&self.last_text, &self.last_prediction) {
            (Some(text), Some(prediction)) => Some((text.as_str(), prediction)),
            _ => None,
        }
    }

    pub fn model(&self) -> &ModelContext {
        &self.ctx
    }
}
