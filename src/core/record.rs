use crate::core::schema::{FEATURE_COUNT, FEATURE_SCHEMA, FieldKind, FieldSpec, field};
use crate::core::value::FieldValue;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing value for field `{0}`")]
    MissingField(&'static str),

    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` expects {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// Field values as collected by an input surface, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every schema field set to its documented default.
    pub fn defaults() -> Self {
        FEATURE_SCHEMA
            .iter()
            .map(|s| (s.name.to_string(), s.default.to_value()))
            .collect()
    }

    pub fn insert<N: Into<String>>(&mut self, name: N, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(name.into(), value)
    }

    pub fn with<N: Into<String>>(mut self, name: N, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fills every field this set does not mention with its schema default.
    pub fn over_defaults(self) -> Self {
        let mut out = Self::defaults();
        out.0.extend(self.0);
        out
    }
}

impl FromIterator<(String, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        FormValues(iter.into_iter().collect())
    }
}

/// One row of input in training-time column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    cells: Vec<(&'static str, FieldValue)>,
}

impl FeatureRecord {
    /// Builds the row by walking the schema in order.
    ///
    /// Categorical values are forwarded as-is; whether an unseen category is
    /// acceptable is for the pipeline to decide. Integer fields are not
    /// clamped here, the input control owns their range.
    pub fn assemble(values: &FormValues) -> Result<Self, RecordError> {
        if let Some(unknown) = values.0.keys().find(|k| field(k).is_none()) {
            return Err(RecordError::UnknownField(unknown.clone()));
        }

        let mut cells = Vec::with_capacity(FEATURE_COUNT);
        for spec in FEATURE_SCHEMA.iter() {
            let value = values
                .get(spec.name)
                .ok_or(RecordError::MissingField(spec.name))?;
            cells.push((spec.name, coerce(spec, value)?));
        }
        Ok(Self { cells })
    }

    pub fn from_defaults() -> Self {
        Self {
            cells: FEATURE_SCHEMA
                .iter()
                .map(|s| (s.name, s.default.to_value()))
                .collect(),
        }
    }

    /// Raw constructor that skips the schema, for exercising pipelines
    /// against malformed rows.
    #[cfg(any(test, feature = "test-support"))]
    pub fn from_cells(cells: Vec<(&'static str, FieldValue)>) -> Self {
        Self { cells }
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.cells.iter().map(|(name, v)| (*name, v))
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.cells.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    pub fn value_at(&self, index: usize) -> Option<&FieldValue> {
        self.cells.get(index).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn coerce(spec: &FieldSpec, value: &FieldValue) -> Result<FieldValue, RecordError> {
    let mismatch = || RecordError::TypeMismatch {
        field: spec.name,
        expected: spec.kind.describe(),
        found: value.kind_name(),
    };

    match (spec.kind, value) {
        (FieldKind::Categorical(_), FieldValue::Text(_)) => Ok(value.clone()),
        (FieldKind::Number { .. }, FieldValue::Number(_)) => Ok(value.clone()),
        (FieldKind::Number { .. }, FieldValue::Integer(i)) => Ok(FieldValue::Number(*i as f64)),
        (FieldKind::Integer { .. }, FieldValue::Integer(_)) => Ok(value.clone()),
        (FieldKind::Integer { .. }, FieldValue::Number(x)) => whole(*x).ok_or_else(mismatch),
        _ => Err(mismatch()),
    }
}

/// `x` as an integer, if it is whole and fits in an `i64` without saturating.
fn whole(x: f64) -> Option<FieldValue> {
    // i64::MAX rounds up to 2^63 as f64, which is already out of range
    let in_range = x >= i64::MIN as f64 && x < i64::MAX as f64;
    (in_range && x.fract() == 0.0).then(|| FieldValue::Integer(x as i64))
}
