use crate::pipeline::artifact::PipelineArtifact;
use crate::pipeline::inference_pipeline::SharedPipeline;
use crate::pipeline::logistic::LogisticPipeline;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_ARTIFACT_PATH: &str = "aussie_rain_pipeline.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(
        "pipeline artifact not found at {}; copy it next to the binary or pass --artifact",
        .path.display()
    )]
    MissingArtifact { path: PathBuf },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid pipeline artifact", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("inconsistent pipeline artifact: {0}")]
    Inconsistent(String),
}

pub fn read_artifact(path: &Path) -> Result<PipelineArtifact, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::MissingArtifact {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and validates the artifact, returning the shared handle the rest of
/// the process borrows from. Call once at startup.
pub fn load_pipeline(path: &Path) -> Result<SharedPipeline, LoadError> {
    let artifact = read_artifact(path)?;
    let width = artifact.encoded_width();
    let pipeline = LogisticPipeline::try_from(artifact).map_err(LoadError::Inconsistent)?;

    info!(
        path = %path.display(),
        columns = pipeline.input_columns().len(),
        encoded_width = width,
        classes = ?pipeline.classes(),
        "loaded inference pipeline"
    );
    Ok(Arc::new(pipeline))
}
