pub mod artifacts;
pub mod engine;
pub mod loader;

pub use artifacts::{LinearClassifier, TfidfVectorizer};
pub use engine::{infer, validate_text, ClassProbabilities, Prediction};
pub use loader::{ArtifactPaths, ModelContext};
