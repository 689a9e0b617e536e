use crate::core::FeatureRecord;
use crate::pipeline::ARTIFACT_CLASSES;
use serde::Serialize;

/// Label the pipeline emits for the rain class.
pub const POSITIVE_LABEL: &str = ARTIFACT_CLASSES[1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RainOutlook {
    Rain,
    NoRain,
}

impl RainOutlook {
    pub fn from_label(label: &str) -> Self {
        if label == POSITIVE_LABEL {
            RainOutlook::Rain
        } else {
            RainOutlook::NoRain
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RainOutlook::Rain => "🌧 Rain is expected tomorrow.",
            RainOutlook::NoRain => "🌤 No rain is expected tomorrow.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: String,
    pub outlook: RainOutlook,
    pub probability_of_rain: f64,
    pub record: FeatureRecord,
}

impl Prediction {
    pub fn rain_expected(&self) -> bool {
        self.outlook == RainOutlook::Rain
    }

    /// Percentage with one decimal, e.g. `"73.2 %"`.
    pub fn probability_display(&self) -> String {
        format_percentage(self.probability_of_rain)
    }
}

pub fn format_percentage(p: f64) -> String {
    format!("{:.1} %", p * 100.0)
}
