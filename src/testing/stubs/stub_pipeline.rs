use crate::core::FeatureRecord;
use crate::pipeline::{Pipeline, PipelineError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Answers every row with the same label and probability.
///
/// `failing_probabilities(n)` makes the next `n` probability calls fail
/// before the stub starts answering again.
pub struct StubPipeline {
    label: String,
    probability: f64,
    probability_failures: AtomicUsize,
    seen: Mutex<Vec<FeatureRecord>>,
}

impl StubPipeline {
    pub fn fixed(label: &str, probability: f64) -> Self {
        Self {
            label: label.to_string(),
            probability,
            probability_failures: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_probabilities(self, times: usize) -> Self {
        self.probability_failures.store(times, Ordering::SeqCst);
        self
    }

    /// Every record handed to either call, in call order.
    pub fn seen_records(&self) -> Vec<FeatureRecord> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, record: &FeatureRecord) {
        self.seen.lock().unwrap().push(record.clone());
    }
}

impl Pipeline for StubPipeline {
    fn predict(&self, record: &FeatureRecord) -> Result<String, PipelineError> {
        self.record(record);
        Ok(self.label.clone())
    }

    fn predict_probabilities(&self, record: &FeatureRecord) -> Result<[f64; 2], PipelineError> {
        self.record(record);
        let fail = self
            .probability_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(PipelineError::Invocation("stubbed probability failure".into()));
        }
        Ok([1.0 - self.probability, self.probability])
    }
}
