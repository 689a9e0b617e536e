//! The fixed input schema shared by the form and by record assembly.
//!
//! `FEATURE_SCHEMA` is listed in the column order the pipeline was trained
//! with. Nothing derives that order from anywhere else: the form walks this
//! array, record assembly walks this array, and the artifact loader checks
//! the artifact's own column list against it.

use crate::core::categories::CategoryList;
use crate::core::value::FieldValue;

pub const FEATURE_COUNT: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Categorical(CategoryList),
    /// Real-valued input. `step` is the form's suggested increment.
    Number { step: f64 },
    /// Integer input bounded by the form control.
    Integer { min: i64, max: i64 },
}

impl FieldKind {
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Categorical(_) => "text",
            FieldKind::Number { .. } => "number",
            FieldKind::Integer { .. } => "integer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Text(&'static str),
    Number(f64),
    Integer(i64),
}

impl FieldDefault {
    pub fn to_value(self) -> FieldValue {
        match self {
            FieldDefault::Text(s) => FieldValue::text(s),
            FieldDefault::Number(x) => FieldValue::Number(x),
            FieldDefault::Integer(i) => FieldValue::Integer(i),
        }
    }
}

/// Which of the two form columns renders the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormColumn {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub help: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
    pub column: FormColumn,
}

const fn categorical(
    name: &'static str,
    help: &'static str,
    list: CategoryList,
    default: &'static str,
    column: FormColumn,
) -> FieldSpec {
    FieldSpec {
        name,
        title: name,
        help,
        kind: FieldKind::Categorical(list),
        default: FieldDefault::Text(default),
        column,
    }
}

const fn number(
    name: &'static str,
    title: &'static str,
    help: &'static str,
    default: f64,
    step: f64,
    column: FormColumn,
) -> FieldSpec {
    FieldSpec {
        name,
        title,
        help,
        kind: FieldKind::Number { step },
        default: FieldDefault::Number(default),
        column,
    }
}

const fn oktas(name: &'static str, title: &'static str, help: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        title,
        help,
        kind: FieldKind::Integer { min: 0, max: 9 },
        default: FieldDefault::Integer(4),
        column: FormColumn::Right,
    }
}

use FormColumn::{Left, Right};

pub static FEATURE_SCHEMA: [FieldSpec; FEATURE_COUNT] = [
    categorical(
        "Location",
        "Weather station the readings come from",
        CategoryList::Stations,
        "Albury",
        Left,
    ),
    number("MinTemp", "MinTemp (°C)", "Minimum temperature today", 10.0, 0.5, Left),
    number("MaxTemp", "MaxTemp (°C)", "Maximum temperature today", 20.0, 0.5, Left),
    number("Rainfall", "Rainfall (mm)", "Rain recorded in the last 24h", 0.0, 0.1, Left),
    number("Evaporation", "Evaporation (mm)", "Class A pan evaporation", 5.0, 0.1, Left),
    number("Sunshine", "Sunshine (hours)", "Hours of bright sunshine", 7.0, 0.1, Left),
    categorical(
        "WindGustDir",
        "Direction of the strongest gust",
        CategoryList::CompassPoints,
        "N",
        Left,
    ),
    number(
        "WindGustSpeed",
        "WindGustSpeed (km/h)",
        "Speed of the strongest gust",
        35.0,
        1.0,
        Left,
    ),
    categorical(
        "WindDir9am",
        "Wind direction at 9am",
        CategoryList::CompassPoints,
        "N",
        Left,
    ),
    categorical(
        "WindDir3pm",
        "Wind direction at 3pm",
        CategoryList::CompassPoints,
        "N",
        Left,
    ),
    number(
        "WindSpeed9am",
        "WindSpeed9am (km/h)",
        "Wind speed at 9am",
        15.0,
        1.0,
        Right,
    ),
    number(
        "WindSpeed3pm",
        "WindSpeed3pm (km/h)",
        "Wind speed at 3pm",
        20.0,
        1.0,
        Right,
    ),
    number("Humidity9am", "Humidity9am (%)", "Relative humidity at 9am", 70.0, 1.0, Right),
    number("Humidity3pm", "Humidity3pm (%)", "Relative humidity at 3pm", 50.0, 1.0, Right),
    number(
        "Pressure9am",
        "Pressure9am (hPa)",
        "Mean sea level pressure at 9am",
        1015.0,
        0.5,
        Right,
    ),
    number(
        "Pressure3pm",
        "Pressure3pm (hPa)",
        "Mean sea level pressure at 3pm",
        1012.0,
        0.5,
        Right,
    ),
    oktas("Cloud9am", "Cloud9am (oktas 0-9)", "Sky obscured by cloud at 9am"),
    oktas("Cloud3pm", "Cloud3pm (oktas 0-9)", "Sky obscured by cloud at 3pm"),
    number("Temp9am", "Temp9am (°C)", "Temperature at 9am", 16.0, 0.5, Right),
    number("Temp3pm", "Temp3pm (°C)", "Temperature at 3pm", 21.0, 0.5, Right),
    categorical(
        "RainToday",
        "Did it rain today?",
        CategoryList::YesNo,
        "No",
        Right,
    ),
];

pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FEATURE_SCHEMA.iter().find(|s| s.name == name)
}

pub fn column_names() -> impl Iterator<Item = &'static str> {
    FEATURE_SCHEMA.iter().map(|s| s.name)
}
