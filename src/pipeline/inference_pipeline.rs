use crate::core::FeatureRecord;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("expected {expected} columns, got {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("column {position} should be `{expected}`, got `{found}`")]
    ColumnOrder {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("column `{column}` expects a {expected} value")]
    TypeMismatch {
        column: String,
        expected: &'static str,
    },

    #[error("pipeline invocation failed: {0}")]
    Invocation(String),
}

/// A trained, read-only binary classifier over one feature row.
///
/// Implementations are expected to tolerate categorical values they never
/// saw during training. The bundled [`LogisticPipeline`](super::LogisticPipeline)
/// encodes them as an all-zero one-hot block; other implementations must
/// document what they do.
pub trait Pipeline {
    /// Class label for the row, e.g. `"Yes"` or `"No"`.
    fn predict(&self, record: &FeatureRecord) -> Result<String, PipelineError>;

    /// `[p_class0, p_class1]` for the row.
    fn predict_probabilities(&self, record: &FeatureRecord) -> Result<[f64; 2], PipelineError>;
}

/// Loaded once and shared read-only for the life of the process.
pub type SharedPipeline = Arc<dyn Pipeline + Send + Sync>;
