mod invoker;
mod prediction;
mod render;

pub use invoker::{InferenceError, InferenceOutcome, invoke, invoke_record};
pub use prediction::{POSITIVE_LABEL, Prediction, RainOutlook, format_percentage};
pub use render::{SCHEMA_HINT, render_failure, render_prediction, render_record};
