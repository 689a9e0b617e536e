use crate::core::schema::column_names;
use crate::core::{FeatureRecord, FieldValue};
use crate::pipeline::artifact::{
    ARTIFACT_CLASSES, ARTIFACT_FORMAT_VERSION, CategoricalColumn, NumericColumn, PipelineArtifact,
};
use crate::pipeline::inference_pipeline::{Pipeline, PipelineError};

/// Logistic regression behind an imputer, a min-max scaler and a one-hot
/// encoder that ignores unknown categories.
#[derive(Debug, Clone)]
pub struct LogisticPipeline {
    input_columns: Vec<String>,
    numeric: Vec<(usize, NumericColumn)>,
    categorical: Vec<(usize, CategoricalColumn)>,
    coefficients: Vec<f64>,
    intercept: f64,
    classes: [String; 2],
}

impl TryFrom<PipelineArtifact> for LogisticPipeline {
    type Error = String;

    fn try_from(a: PipelineArtifact) -> Result<Self, Self::Error> {
        if a.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "unsupported format_version {} (expected {ARTIFACT_FORMAT_VERSION})",
                a.format_version
            ));
        }

        if !a.input_columns.iter().map(String::as_str).eq(column_names()) {
            return Err(format!(
                "input_columns [{}] do not match the form schema",
                a.input_columns.join(", ")
            ));
        }

        let width = a.encoded_width();
        if a.coefficients.len() != width {
            return Err(format!(
                "{} coefficients for {width} encoded features",
                a.coefficients.len()
            ));
        }
        if !a.intercept.is_finite() || a.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("non-finite weight".into());
        }

        let classes: [String; 2] = a
            .classes
            .try_into()
            .map_err(|v: Vec<String>| format!("expected 2 classes, got {}", v.len()))?;
        if classes != ARTIFACT_CLASSES {
            return Err(format!(
                "classes {classes:?} must be {ARTIFACT_CLASSES:?}, negative first"
            ));
        }

        let position = |name: &str| {
            a.input_columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| format!("`{name}` is not an input column"))
        };

        let mut covered = vec![false; a.input_columns.len()];
        let mut claim = |idx: usize, name: &str| {
            if std::mem::replace(&mut covered[idx], true) {
                Err(format!("`{name}` is encoded twice"))
            } else {
                Ok(idx)
            }
        };

        let mut numeric = Vec::with_capacity(a.numeric.len());
        for col in a.numeric {
            if !(col.impute_mean.is_finite()
                && col.scale_min.is_finite()
                && col.scale_max.is_finite())
            {
                return Err(format!("non-finite scaling for `{}`", col.name));
            }
            let idx = claim(position(&col.name)?, &col.name)?;
            numeric.push((idx, col));
        }

        let mut categorical = Vec::with_capacity(a.categorical.len());
        for col in a.categorical {
            let idx = claim(position(&col.name)?, &col.name)?;
            categorical.push((idx, col));
        }

        if let Some(idx) = covered.iter().position(|c| !c) {
            return Err(format!("`{}` is never encoded", a.input_columns[idx]));
        }

        Ok(Self {
            input_columns: a.input_columns,
            numeric,
            categorical,
            coefficients: a.coefficients,
            intercept: a.intercept,
            classes,
        })
    }
}

impl LogisticPipeline {
    pub fn classes(&self) -> &[String; 2] {
        &self.classes
    }

    pub fn input_columns(&self) -> &[String] {
        &self.input_columns
    }

    fn check_columns(&self, record: &FeatureRecord) -> Result<(), PipelineError> {
        if record.len() != self.input_columns.len() {
            return Err(PipelineError::ColumnCount {
                expected: self.input_columns.len(),
                found: record.len(),
            });
        }
        let pairs = self.input_columns.iter().zip(record.columns());
        for (position, (expected, found)) in pairs.enumerate() {
            if expected != found {
                return Err(PipelineError::ColumnOrder {
                    position,
                    expected: expected.clone(),
                    found: found.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Encoded feature vector laid out like `coefficients`.
    pub fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>, PipelineError> {
        self.check_columns(record)?;

        let mut features = Vec::with_capacity(self.coefficients.len());

        for (idx, col) in &self.numeric {
            let x = record
                .value_at(*idx)
                .and_then(FieldValue::as_f64)
                .ok_or_else(|| PipelineError::TypeMismatch {
                    column: col.name.clone(),
                    expected: "numeric",
                })?;
            features.push(col.scale(x));
        }

        for (idx, col) in &self.categorical {
            let value = record
                .value_at(*idx)
                .and_then(FieldValue::as_text)
                .ok_or_else(|| PipelineError::TypeMismatch {
                    column: col.name.clone(),
                    expected: "categorical",
                })?;
            let hot = col.slot(value);
            features.extend(
                (0..col.categories.len()).map(|i| if Some(i) == hot { 1.0 } else { 0.0 }),
            );
        }

        Ok(features)
    }

    fn positive_probability(&self, record: &FeatureRecord) -> Result<f64, PipelineError> {
        let features = self.transform(record)?;
        let z = self.intercept
            + self
                .coefficients
                .iter()
                .zip(&features)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + libm::exp(-z))
}

impl Pipeline for LogisticPipeline {
    fn predict(&self, record: &FeatureRecord) -> Result<String, PipelineError> {
        let p1 = self.positive_probability(record)?;
        let idx = if p1 >= 0.5 { 1 } else { 0 };
        Ok(self.classes[idx].clone())
    }

    fn predict_probabilities(&self, record: &FeatureRecord) -> Result<[f64; 2], PipelineError> {
        let p1 = self.positive_probability(record)?;
        Ok([1.0 - p1, p1])
    }
}
