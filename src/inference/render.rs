use crate::core::FeatureRecord;
use crate::inference::invoker::InferenceError;
use crate::inference::prediction::Prediction;
use chrono::NaiveDate;
use std::fmt::Write;

pub const SCHEMA_HINT: &str = "Check that the form's column names and order match the input \
columns the pipeline was trained with.";

pub fn render_prediction(prediction: &Prediction, forecast_for: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Forecast for {}", forecast_for.format("%A %-d %B %Y"));
    let _ = writeln!(out, "{}", prediction.outlook.message());
    let _ = writeln!(
        out,
        "Probability of rain tomorrow: {}",
        prediction.probability_display()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Input details");
    out.push_str(&render_record(&prediction.record));
    out
}

pub fn render_failure(err: &InferenceError) -> String {
    format!("✗ Something went wrong during the forecast: {err}\nℹ {SCHEMA_HINT}\n")
}

/// One-row table: a header line of column names over a line of values.
pub fn render_record(record: &FeatureRecord) -> String {
    let cells: Vec<(&str, String)> = record.iter().map(|(n, v)| (n, v.to_string())).collect();

    let mut header = String::new();
    let mut row = String::new();
    for (name, value) in &cells {
        let width = name.chars().count().max(value.chars().count());
        let _ = write!(header, "{name:<width$}  ");
        let _ = write!(row, "{value:<width$}  ");
    }
    format!("{}\n{}\n", header.trim_end(), row.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FormValues, RecordError};
    use crate::inference::invoke;
    use crate::testing::stubs::StubPipeline;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn rain_render_shows_message_and_metric() {
        let stub = StubPipeline::fixed("Yes", 0.732);
        let p = invoke(&stub, &FormValues::defaults()).unwrap();
        let text = render_prediction(&p, date());
        assert!(text.starts_with("Forecast for Monday 19 October 2026\n"));
        assert!(text.contains("🌧 Rain is expected tomorrow."));
        assert!(text.contains("Probability of rain tomorrow: 73.2 %"));
    }

    #[test]
    fn dry_render() {
        let stub = StubPipeline::fixed("No", 0.04);
        let p = invoke(&stub, &FormValues::defaults()).unwrap();
        let text = render_prediction(&p, date());
        assert!(text.contains("🌤 No rain is expected tomorrow."));
        assert!(text.contains("4.0 %"));
    }

    #[test]
    fn record_table_keeps_schema_order() {
        let table = render_record(&FeatureRecord::from_defaults());
        let mut lines = table.lines();
        let header: Vec<_> = lines.next().unwrap().split_whitespace().collect();
        let values: Vec<_> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(header.len(), 21);
        assert_eq!(header[0], "Location");
        assert_eq!(header[20], "RainToday");
        assert_eq!(values[0], "Albury");
        assert_eq!(values[16], "4");
        assert_eq!(values[20], "No");
    }

    #[test]
    fn failure_carries_the_schema_hint() {
        let err = InferenceError::Assembly(RecordError::MissingField("Sunshine"));
        let text = render_failure(&err);
        assert!(text.contains("Sunshine"));
        assert!(text.contains(SCHEMA_HINT));
    }

    #[test]
    fn rendering_is_deterministic() {
        let stub = StubPipeline::fixed("Yes", 0.61);
        let a = render_prediction(&invoke(&stub, &FormValues::defaults()).unwrap(), date());
        let b = render_prediction(&invoke(&stub, &FormValues::defaults()).unwrap(), date());
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
