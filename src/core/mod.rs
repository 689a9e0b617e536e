pub mod categories;
pub mod record;
pub mod schema;
pub mod value;

pub use categories::{CategoryList, CompassPoint, Station, YesNo};
pub use record::{FeatureRecord, FormValues, RecordError};
pub use schema::{
    FEATURE_COUNT, FEATURE_SCHEMA, FieldDefault, FieldKind, FieldSpec, FormColumn,
};
pub use value::FieldValue;
