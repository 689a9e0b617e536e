use crate::core::{FeatureRecord, FormValues, RecordError};
use crate::inference::prediction::{Prediction, RainOutlook};
use crate::pipeline::{Pipeline, PipelineError};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("could not assemble the input row: {0}")]
    Assembly(#[from] RecordError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("pipeline returned an invalid probability: {0}")]
    InvalidProbability(f64),
}

pub type InferenceOutcome = Result<Prediction, InferenceError>;

/// Assembles the row and asks the pipeline about it.
///
/// Failures are returned, never raised; the caller decides how to show them
/// and carries on with the next submission.
pub fn invoke(pipeline: &dyn Pipeline, values: &FormValues) -> InferenceOutcome {
    let outcome = FeatureRecord::assemble(values)
        .map_err(InferenceError::from)
        .and_then(|record| invoke_record(pipeline, record));

    if let Err(err) = &outcome {
        warn!(error = %err, "inference failed");
    }
    outcome
}

pub fn invoke_record(pipeline: &dyn Pipeline, record: FeatureRecord) -> InferenceOutcome {
    debug!(record = ?record, "invoking pipeline");

    let probabilities = pipeline.predict_probabilities(&record)?;
    let label = pipeline.predict(&record)?;

    let p = probabilities[1];
    if !(0.0..=1.0).contains(&p) {
        return Err(InferenceError::InvalidProbability(p));
    }

    debug!(%label, probability_of_rain = p, "pipeline answered");
    Ok(Prediction {
        outlook: RainOutlook::from_label(&label),
        label,
        probability_of_rain: p,
        record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use crate::testing::stubs::StubPipeline;

    #[test]
    fn stub_answer_becomes_a_rain_prediction() {
        let stub = StubPipeline::fixed("Yes", 0.732);
        let p = invoke(&stub, &FormValues::defaults()).unwrap();
        assert_eq!(p.outlook, RainOutlook::Rain);
        assert_eq!(p.label, "Yes");
        assert_eq!(p.probability_display(), "73.2 %");
        assert_eq!(p.record, FeatureRecord::from_defaults());
    }

    #[test]
    fn both_calls_see_the_same_row() {
        let stub = StubPipeline::fixed("No", 0.1);
        let values = FormValues::defaults().with("RainToday", FieldValue::text("Yes"));
        invoke(&stub, &values).unwrap();
        let seen = stub.seen_records();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], seen[1]);
        assert_eq!(seen[0].get("RainToday"), Some(&FieldValue::text("Yes")));
    }

    #[test]
    fn probability_failure_is_returned_not_raised() {
        let stub = StubPipeline::fixed("Yes", 0.9).failing_probabilities(1);
        let err = invoke(&stub, &FormValues::defaults()).unwrap_err();
        assert!(matches!(err, InferenceError::Pipeline(PipelineError::Invocation(_))));

        // the stub recovers, as does the caller
        assert!(invoke(&stub, &FormValues::defaults()).is_ok());
    }

    #[test]
    fn assembly_failure_skips_the_pipeline() {
        let stub = StubPipeline::fixed("Yes", 0.9);
        let values = FormValues::defaults().with("Cloud9am", FieldValue::text("overcast"));
        let err = invoke(&stub, &values).unwrap_err();
        assert!(matches!(err, InferenceError::Assembly(RecordError::TypeMismatch { .. })));
        assert!(stub.seen_records().is_empty());
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        for bad in [1.5, -0.1, f64::NAN] {
            let stub = StubPipeline::fixed("Yes", bad);
            assert!(matches!(
                invoke(&stub, &FormValues::defaults()),
                Err(InferenceError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let stub = StubPipeline::fixed("No", 0.2468);
        let a = invoke(&stub, &FormValues::defaults()).unwrap();
        let b = invoke(&stub, &FormValues::defaults()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.probability_display(), b.probability_display());
    }
}
