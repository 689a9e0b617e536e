mod artifact;
mod inference_pipeline;
mod loader;
mod logistic;

pub use artifact::{
    ARTIFACT_CLASSES, ARTIFACT_FORMAT_VERSION, CategoricalColumn, NumericColumn, PipelineArtifact,
    artifact_schema,
};
pub use inference_pipeline::{Pipeline, PipelineError, SharedPipeline};
pub use loader::{DEFAULT_ARTIFACT_PATH, LoadError, load_pipeline, read_artifact};
pub use logistic::LogisticPipeline;
