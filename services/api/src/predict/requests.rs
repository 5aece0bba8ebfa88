use serde::Deserialize;

/// `text` stays optional so an absent field can be reported separately
/// from an empty one.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: Option<String>,
}
