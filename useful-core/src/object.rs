//! Structured value helpers
//!
//! Values are inspected through their `serde` representation, so any type
//! implementing `Serialize` can be queried by property name and copied
//! without sharing state with the original.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Independent copy of `source` made through its serialized form
///
/// Fails with [`Error::NotCloneable`] when the value cannot be represented,
/// e.g. a map with non-string keys.
pub fn deep_clone<T>(source: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    serde_json::to_value(source)
        .and_then(serde_json::from_value)
        .map_err(|e| {
            tracing::debug!(error = %e, "deep clone failed");
            Error::NotCloneable(e.to_string())
        })
}

/// Value of the field `name` on `source`, converted to `V`
///
/// # Errors
///
/// - [`Error::InvalidArgument`] for a blank name or a source that serializes
///   to null
/// - [`Error::PropertyNotFound`] when the source has no such field
/// - [`Error::PropertyType`] when the field cannot be read as `V`
pub fn property_value<S, V>(source: &S, name: &str) -> Result<V>
where
    S: Serialize + ?Sized,
    V: DeserializeOwned,
{
    if name.trim().is_empty() {
        return Err(Error::invalid_argument("name", "property name is blank"));
    }

    let value = serde_json::to_value(source)
        .map_err(|e| Error::invalid_argument("source", e.to_string()))?;
    if value.is_null() {
        return Err(Error::invalid_argument("source", "source is null"));
    }

    let field = field(value, name).ok_or_else(|| Error::PropertyNotFound {
        name: name.to_string(),
    })?;

    serde_json::from_value(field).map_err(|e| {
        tracing::debug!(property = name, error = %e, "property conversion failed");
        Error::PropertyType {
            name: name.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Like [`property_value`], but `V::default()` on any failure
pub fn property_value_or_default<S, V>(source: &S, name: &str) -> V
where
    S: Serialize + ?Sized,
    V: DeserializeOwned + Default,
{
    property_value(source, name).unwrap_or_default()
}

/// Does `source` carry a field called `name`? Never fails.
pub fn has_property<S>(source: &S, name: &str) -> bool
where
    S: Serialize + ?Sized,
{
    if name.trim().is_empty() {
        return false;
    }
    serde_json::to_value(source)
        .ok()
        .and_then(|value| field(value, name))
        .is_some()
}

fn field(value: Value, name: &str) -> Option<Value> {
    match value {
        Value::Object(mut fields) => fields.remove(name),
        _ => None,
    }
}
