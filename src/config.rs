//! The record boundary: serde conversion plus pre-factory validation.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{PrefabError, Result};

/// Implemented by every configuration record in the crate.
///
/// Records are plain serde value types. This trait adds the boundary a
/// caller-supplied mapping crosses before reaching an external factory:
/// structural mismatches are rejected while converting, everything the
/// type system cannot express in [`validate`](Config::validate).
pub trait Config: Serialize + DeserializeOwned + Sized {
    /// Record kind, used in error messages.
    const KIND: &'static str;

    /// Checks constraints beyond the record's structural shape.
    ///
    /// The default accepts everything; records with numeric or geometric
    /// constraints override it.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Builds a record from a plain JSON mapping, then validates it.
    fn from_value(value: Value) -> Result<Self> {
        let record: Self = serde_json::from_value(value)
            .map_err(|source| PrefabError::InvalidShape { kind: Self::KIND, source })?;
        record.validate()?;
        log::debug!("accepted {} configuration", Self::KIND);
        Ok(record)
    }

    /// Builds a record from a JSON string, then validates it.
    fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|source| PrefabError::InvalidShape { kind: Self::KIND, source })?;
        Self::from_value(value)
    }

    /// Serializes the record back to a plain JSON mapping.
    ///
    /// Absent fields are omitted, so a default record becomes an empty
    /// mapping and `to_value` → [`from_value`](Config::from_value)
    /// reproduces an equal record.
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Rejects NaN and infinities in an optional numeric field.
pub(crate) fn finite(kind: &'static str, field: &'static str, value: Option<f32>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() => Err(PrefabError::NonFiniteField { kind, field }),
        _ => Ok(()),
    }
}
