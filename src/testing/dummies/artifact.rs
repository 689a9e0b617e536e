use crate::core::schema::column_names;
use crate::core::{CategoryList, FEATURE_SCHEMA, FieldKind};
use crate::pipeline::{
    ARTIFACT_CLASSES, ARTIFACT_FORMAT_VERSION, CategoricalColumn, NumericColumn, PipelineArtifact,
};

// (name, mean, min, max, weight)
const NUMERIC: [(&str, f64, f64, f64, f64); 16] = [
    ("MinTemp", 12.2, -8.5, 33.9, 0.0),
    ("MaxTemp", 23.2, -4.8, 48.1, 0.0),
    ("Rainfall", 2.36, 0.0, 371.0, 0.0),
    ("Evaporation", 5.47, 0.0, 145.0, 0.0),
    ("Sunshine", 7.6, 0.0, 14.5, -2.0),
    ("WindGustSpeed", 40.0, 6.0, 135.0, 1.5),
    ("WindSpeed9am", 14.0, 0.0, 130.0, 0.0),
    ("WindSpeed3pm", 18.6, 0.0, 87.0, 0.0),
    ("Humidity9am", 68.9, 0.0, 100.0, 0.0),
    ("Humidity3pm", 51.5, 0.0, 100.0, 6.0),
    ("Pressure9am", 1017.6, 980.5, 1041.0, 0.0),
    ("Pressure3pm", 1015.3, 977.1, 1039.6, -4.0),
    ("Cloud9am", 4.4, 0.0, 9.0, 0.0),
    ("Cloud3pm", 4.5, 0.0, 9.0, 0.0),
    ("Temp9am", 16.99, -7.2, 40.2, 0.0),
    ("Temp3pm", 21.68, -5.4, 46.7, 0.0),
];

/// A small but internally consistent artifact: humid afternoons, low
/// pressure, little sunshine and rain today push towards "Yes". Darwin is
/// the only station with a weight of its own.
pub fn sample_artifact() -> PipelineArtifact {
    let numeric: Vec<NumericColumn> = NUMERIC
        .iter()
        .map(|&(name, impute_mean, scale_min, scale_max, _)| NumericColumn {
            name: name.into(),
            impute_mean,
            scale_min,
            scale_max,
        })
        .collect();
    let mut coefficients: Vec<f64> = NUMERIC.iter().map(|n| n.4).collect();

    let mut categorical = Vec::new();
    for spec in FEATURE_SCHEMA {
        let FieldKind::Categorical(list) = spec.kind else {
            continue;
        };
        let categories: Vec<String> = list.options().into_iter().map(String::from).collect();
        for c in &categories {
            coefficients.push(match (list, c.as_str()) {
                (CategoryList::Stations, "Darwin") => 0.5,
                (CategoryList::YesNo, "Yes") => 0.9,
                _ => 0.0,
            });
        }
        categorical.push(CategoricalColumn {
            name: spec.name.into(),
            categories,
        });
    }

    PipelineArtifact {
        format_version: ARTIFACT_FORMAT_VERSION,
        input_columns: column_names().map(String::from).collect(),
        numeric,
        categorical,
        coefficients,
        intercept: -2.5,
        classes: ARTIFACT_CLASSES.map(String::from).to_vec(),
    }
}
