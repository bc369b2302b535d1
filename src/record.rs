//! Record — schema-validated entity types held by a `Store`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

/// A schema-validated record type.
///
/// `validate` is the only door into a `Store`: given an untyped JSON
/// payload it checks required-field presence and value constraints,
/// returning the typed record or the full list of violations. It has no
/// side effects.
///
/// Types that carry a server-assigned identifier implement `id` and
/// `assign_id`; the defaults are no-ops for identifier-less records.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    /// Validate an untyped payload against this record's schema.
    fn validate(input: &Value) -> Result<Self, ValidationError>;

    /// The record's identifier, for types that carry one.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Install a server-assigned identifier. Any caller-supplied value is
    /// overwritten at insert, never validated.
    fn assign_id(&mut self, _id: String) {}
}
