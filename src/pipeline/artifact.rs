use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// Class labels every artifact must declare, negative class first.
pub const ARTIFACT_CLASSES: [&str; 2] = ["No", "Yes"];

/// On-disk form of a fitted imputer + scaler + one-hot + logistic-regression
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PipelineArtifact {
    #[schemars(title = "Format Version", description = "Must be 1")]
    pub format_version: u32,

    #[schemars(
        title = "Input Columns",
        description = "Training-time column names, in training order"
    )]
    pub input_columns: Vec<String>,

    #[schemars(title = "Numeric Columns")]
    pub numeric: Vec<NumericColumn>,

    #[schemars(title = "Categorical Columns")]
    pub categorical: Vec<CategoricalColumn>,

    #[schemars(
        title = "Coefficients",
        description = "Numeric weights in `numeric` order, then one-hot blocks in `categorical` order"
    )]
    pub coefficients: Vec<f64>,

    pub intercept: f64,

    #[schemars(
        title = "Classes",
        description = "Exactly two labels, negative class first"
    )]
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NumericColumn {
    pub name: String,

    #[schemars(description = "Replacement for missing (non-finite) values")]
    pub impute_mean: f64,

    pub scale_min: f64,
    pub scale_max: f64,
}

impl NumericColumn {
    pub fn scale(&self, x: f64) -> f64 {
        let x = if x.is_finite() { x } else { self.impute_mean };
        let span = self.scale_max - self.scale_min;
        if span == 0.0 {
            0.0
        } else {
            (x - self.scale_min) / span
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoricalColumn {
    pub name: String,
    pub categories: Vec<String>,
}

impl CategoricalColumn {
    /// Position of `value` in the one-hot block; `None` encodes as all zeros.
    pub fn slot(&self, value: &str) -> Option<usize> {
        self.categories.iter().position(|c| c == value)
    }
}

impl PipelineArtifact {
    /// Width of the encoded feature vector.
    pub fn encoded_width(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|c| c.categories.len())
                .sum::<usize>()
    }
}

pub fn artifact_schema() -> Schema {
    schema_for!(PipelineArtifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn humidity() -> NumericColumn {
        NumericColumn {
            name: "Humidity3pm".into(),
            impute_mean: 51.5,
            scale_min: 0.0,
            scale_max: 100.0,
        }
    }

    #[test]
    fn scaling_imputes_non_finite_values() {
        let col = humidity();
        assert!((col.scale(25.0) - 0.25).abs() < 1e-12);
        assert!((col.scale(f64::NAN) - 0.515).abs() < 1e-12);
        assert!((col.scale(f64::INFINITY) - 0.515).abs() < 1e-12);
        // out of the fitted range is extrapolated, not clipped
        assert!((col.scale(120.0) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn degenerate_span_scales_to_zero() {
        let col = NumericColumn {
            scale_min: 3.0,
            scale_max: 3.0,
            ..humidity()
        };
        assert_eq!(col.scale(10.0), 0.0);
    }

    #[test]
    fn unknown_category_has_no_slot() {
        let col = CategoricalColumn {
            name: "RainToday".into(),
            categories: vec!["No".into(), "Yes".into()],
        };
        assert_eq!(col.slot("Yes"), Some(1));
        assert_eq!(col.slot("Maybe"), None);
    }

    #[test]
    fn schema_lists_required_keys() {
        let schema = serde_json::to_value(artifact_schema()).unwrap();
        let required = schema["required"].as_array().unwrap();
        for key in ["format_version", "input_columns", "coefficients", "classes"] {
            assert!(required.iter().any(|v| v == key), "{key} not required");
        }
    }
}
