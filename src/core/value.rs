use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// A single cell of form input.
///
/// Deserialization is untagged: JSON integers become `Integer`, other
/// numbers become `Number`, strings become `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text<S: Into<String>>(s: S) -> Self {
        FieldValue::Text(s.into())
    }

    /// Numeric view of the value; `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Number(x) => Some(*x),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{i}"),
            // Debug keeps the trailing ".0" so numbers never look like integers
            FieldValue::Number(x) => write!(f, "{x:?}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_picks_the_narrowest_kind() {
        let v: Vec<FieldValue> = serde_json::from_str(r#"[4, 4.5, 1015.0, "NNE"]"#).unwrap();
        assert_eq!(
            v,
            vec![
                FieldValue::Integer(4),
                FieldValue::Number(4.5),
                FieldValue::Number(1015.0),
                FieldValue::text("NNE"),
            ]
        );
    }

    #[test]
    fn display_keeps_numbers_distinguishable() {
        assert_eq!(FieldValue::Number(10.0).to_string(), "10.0");
        assert_eq!(FieldValue::Integer(10).to_string(), "10");
        assert_eq!(FieldValue::text("Yes").to_string(), "Yes");
    }
}
