//! Loads the two model artifacts exactly once at process startup.
//!
//! A failed or inconsistent load is fatal: the hosting service must exit
//! rather than serve degraded predictions.

use newscheck_common::error::{NewscheckError, NewscheckResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::artifacts::{LinearClassifier, TfidfVectorizer};

pub const CLASSIFIER_FILE: &str = "fake_news_model.bin";
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.bin";

#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub classifier: PathBuf,
    pub vectorizer: PathBuf,
}

impl ArtifactPaths {
    /// Resolve the standard artifact file names inside a model directory.
    pub fn new(model_dir: &Path) -> Self {
        Self {
            classifier: model_dir.join(CLASSIFIER_FILE),
            vectorizer: model_dir.join(VECTORIZER_FILE),
        }
    }
}

/// Immutable handles to both loaded artifacts.
///
/// Constructed once at startup and shared read-only (`Arc`) with every
/// request-handling path for the lifetime of the process.
#[derive(Debug)]
pub struct ModelContext {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
}

impl ModelContext {
    /// Deserialize both artifacts and verify their mutual consistency.
    pub fn load(paths: &ArtifactPaths) -> NewscheckResult<Self> {
        let vectorizer: TfidfVectorizer = read_artifact("vectorizer", &paths.vectorizer)?;
        let classifier: LinearClassifier = read_artifact("classifier", &paths.classifier)?;

        if !vectorizer.is_consistent() {
            return Err(NewscheckError::ArtifactLoad {
                name: "vectorizer",
                path: paths.vectorizer.clone(),
                cause: "vocabulary index out of range of the idf table".to_string(),
            });
        }

        if classifier.n_features() != vectorizer.n_features() {
            return Err(NewscheckError::ArtifactLoad {
                name: "classifier",
                path: paths.classifier.clone(),
                cause: format!(
                    "feature width mismatch: classifier expects {} features, vectorizer produces {}",
                    classifier.n_features(),
                    vectorizer.n_features()
                ),
            });
        }

        tracing::info!(
            vectorizer = %paths.vectorizer.display(),
            classifier = %paths.classifier.display(),
            features = vectorizer.n_features(),
            max_features = vectorizer.max_features,
            "model artifacts loaded"
        );

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    pub fn n_features(&self) -> usize {
        self.vectorizer.n_features()
    }
}

fn read_artifact<T: DeserializeOwned>(name: &'static str, path: &Path) -> NewscheckResult<T> {
    let bytes = fs::read(path).map_err(|e| NewscheckError::ArtifactLoad {
        name,
        path: path.to_path_buf(),
        cause: e.to_string(),
    })?;
    bincode::deserialize(&bytes).map_err(|e| NewscheckError::ArtifactLoad {
        name,
        path: path.to_path_buf(),
        cause: e.to_string(),
    })
}

/// Serialize an artifact to its on-disk form. Used by the artifact export
/// collaborator and by tests.
pub fn write_artifact<T: Serialize>(name: &'static str, path: &Path, value: &T) -> NewscheckResult<()> {
    let bytes = bincode::serialize(value).map_err(|e| NewscheckError::ArtifactLoad {
        name,
        path: path.to_path_buf(),
        cause: e.to_string(),
    })?;
    fs::write(path, bytes).map_err(|e| NewscheckError::ArtifactLoad {
        name,
        path: path.to_path_buf(),
        cause: e.to_string(),
    })
}
