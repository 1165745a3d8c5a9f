//! Wire representation of an event

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::Result;

/// An event in the API's JSON schema, with camelCase field names.
///
/// Absent values are never present as `null`: a field is either set or
/// missing from the object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct WireEvent(Map<String, Value>);

impl WireEvent {
    pub(crate) fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, wire_name: &str) -> Option<&Value> {
        self.0.get(wire_name)
    }

    /// String value of a field, if it is present and a string
    pub fn get_str(&self, wire_name: &str) -> Option<&str> {
        self.get(wire_name).and_then(Value::as_str)
    }

    pub fn contains(&self, wire_name: &str) -> bool {
        self.0.contains_key(wire_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names in emission order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Encode as a JSON document.
    ///
    /// # Errors
    /// Returns `EnforcementError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<WireEvent> for Value {
    fn from(event: WireEvent) -> Self {
        event.into_value()
    }
}
