//! Entry points behind each subcommand. `main` only parses arguments, sets
//! up logging and picks one of these.

use crate::cli::PredictArgs;
use crate::config::AppConfig;
use crate::core::FormValues;
use crate::inference::{
    InferenceOutcome, Prediction, SCHEMA_HINT, invoke, render_failure, render_prediction,
};
use crate::pipeline::{artifact_schema, load_pipeline};
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::{Session, SessionSummary, tomorrow};
use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Loads the pipeline, then runs the interactive form until the user stops.
///
/// A missing artifact returns before the driver is asked anything.
pub fn run_form<D: PromptDriver, W: Write>(
    config: &AppConfig,
    driver: D,
    out: &mut W,
) -> Result<SessionSummary> {
    let pipeline = load_pipeline(&config.artifact_path)?;
    Session::new(pipeline, driver).run(out)
}

/// One prediction from a values file.
///
/// The outer error covers loading and I/O; the inner outcome is the
/// prediction itself, already written to `out`.
pub fn run_predict<W: Write>(
    config: &AppConfig,
    args: &PredictArgs,
    out: &mut W,
) -> Result<InferenceOutcome> {
    let pipeline = load_pipeline(&config.artifact_path)?;
    let values = read_values(&args.input)?;
    let outcome = invoke(pipeline.as_ref(), &values);

    match (&outcome, args.json) {
        (Ok(prediction), true) => write_json(out, &prediction_report(prediction))?,
        (Err(err), true) => write_json(
            out,
            &json!({ "error": err.to_string(), "hint": SCHEMA_HINT }),
        )?,
        (Ok(prediction), false) => write!(out, "{}", render_prediction(prediction, tomorrow()))?,
        (Err(err), false) => write!(out, "{}", render_failure(err))?,
    }
    Ok(outcome)
}

/// Reports a fatal error with its cause chain on a single line.
pub fn report_failure<W: Write>(err: &anyhow::Error, out: &mut W) {
    // nowhere left to report a failed write to
    let _ = writeln!(out, "✗ {err:#}");
}

pub fn write_artifact_schema<W: Write>(out: &mut W) -> Result<()> {
    write_json(out, &serde_json::to_value(artifact_schema())?)
}

fn read_values(path: &Path) -> Result<FormValues> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read values from {}", path.display()))?;
    let values: FormValues = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON object of field values", path.display()))?;
    Ok(values.over_defaults())
}

fn prediction_report(p: &Prediction) -> Value {
    json!({
        "label": p.label,
        "rain_expected": p.rain_expected(),
        "probability_of_rain": p.probability_of_rain,
        "probability_display": p.probability_display(),
        "forecast_for": tomorrow().to_string(),
        "input": p.record,
    })
}

fn write_json<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FEATURE_COUNT;
    use crate::inference::InferenceError;
    use crate::pipeline::LoadError;
    use crate::testing::dummies::sample_artifact;
    use crate::testing::stubs::ScriptedDriver;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn workspace() -> (TempDir, AppConfig) {
        let dir = tempdir().unwrap();
        let artifact_path = dir.path().join("aussie_rain_pipeline.json");
        fs::write(&artifact_path, serde_json::to_string(&sample_artifact()).unwrap()).unwrap();
        let config = AppConfig {
            artifact_path,
            ..AppConfig::default()
        };
        (dir, config)
    }

    fn values_file(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("values.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn missing_artifact_halts_before_any_prompt() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            artifact_path: dir.path().join("nope.json"),
            ..AppConfig::default()
        };
        let driver = ScriptedDriver::accepting_defaults(1);
        let mut out = Vec::new();

        let err = run_form(&config, &driver, &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::MissingArtifact { .. })
        ));
        assert_eq!(driver.asked(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn form_round_trip_against_a_real_artifact() {
        let (_dir, config) = workspace();
        let driver = ScriptedDriver::accepting_defaults(2);
        let mut out = Vec::new();

        let summary = run_form(&config, &driver, &mut out).unwrap();

        assert_eq!(summary, SessionSummary { succeeded: 2, failed: 0 });
        assert_eq!(driver.asked(), 2 * (FEATURE_COUNT + 1));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("🌤 No rain is expected tomorrow.").count(), 2);
    }

    #[test]
    fn predict_fills_defaults_and_prints_json() {
        let (dir, config) = workspace();
        let input = values_file(
            &dir,
            r#"{ "Humidity3pm": 95.0, "Sunshine": 0.0, "Pressure3pm": 1000.0, "RainToday": "Yes" }"#,
        );
        let args = PredictArgs { input, json: true };
        let mut out = Vec::new();

        let prediction = run_predict(&config, &args, &mut out).unwrap().unwrap();
        assert!(prediction.rain_expected());

        let report: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["label"], "Yes");
        assert_eq!(report["rain_expected"], true);
        assert_eq!(report["input"]["Location"], "Albury");
        assert_eq!(report["input"].as_object().unwrap().len(), FEATURE_COUNT);
        let first_key = report["input"].as_object().unwrap().keys().next().cloned();
        assert_eq!(first_key.as_deref(), Some("Location"));
    }

    #[test]
    fn predict_failure_is_rendered_with_the_hint() {
        let (dir, config) = workspace();
        let input = values_file(&dir, r#"{ "Cloud9am": "lots" }"#);
        let args = PredictArgs { input, json: false };
        let mut out = Vec::new();

        let outcome = run_predict(&config, &args, &mut out).unwrap();
        assert!(matches!(outcome, Err(InferenceError::Assembly(_))));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cloud9am"));
        assert!(text.contains(SCHEMA_HINT));
    }

    #[test]
    fn predict_rejects_non_object_input() {
        let (dir, config) = workspace();
        let input = values_file(&dir, "[1, 2, 3]");
        let args = PredictArgs { input, json: false };
        assert!(run_predict(&config, &args, &mut Vec::new()).is_err());
    }

    #[test]
    fn fatal_errors_are_reported_once_with_their_cause() {
        let dir = tempdir().unwrap();
        let config = AppConfig {
            artifact_path: dir.path().join("nope.json"),
            ..AppConfig::default()
        };
        let err = run_form(&config, ScriptedDriver::accepting_defaults(1), &mut Vec::new())
            .unwrap_err();

        let mut out = Vec::new();
        report_failure(&err, &mut out);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.matches("not found").count(), 1);
        assert!(text.starts_with("✗ "));
    }

    #[test]
    fn artifact_schema_is_valid_json() {
        let mut out = Vec::new();
        write_artifact_schema(&mut out).unwrap();
        let schema: Value = serde_json::from_slice(&out).unwrap();
        assert!(schema["properties"]["coefficients"].is_object());
    }
}
