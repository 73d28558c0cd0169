//! Schemaless memory input supplied by callers.

use crate::error::MemoryError;
use crate::model::NewMemory;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Memory-like data with no guaranteed fields.
///
/// Stores accept this before identity is assigned. Keys are kept verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct InputMemory(Map<String, Value>);

impl InputMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a value, returning the previous one for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Read the mapping as a typed record.
    ///
    /// Fails when `role` or `content` is missing or has the wrong shape.
    /// Unrecognized keys land in [`NewMemory::extra`]; `_id` and `_timestamp`
    /// are dropped since the store assigns them.
    pub fn into_memory(self) -> Result<NewMemory, MemoryError> {
        serde_json::from_value(Value::Object(self.0)).map_err(|err| {
            debug!("rejected memory input: {err}");
            MemoryError::from(err)
        })
    }
}

impl From<Map<String, Value>> for InputMemory {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<NewMemory> for InputMemory {
    type Error = MemoryError;

    fn try_from(memory: NewMemory) -> Result<Self, Self::Error> {
        let value = serde_json::to_value(memory)?;
        Ok(Self(serde_json::from_value(value)?))
    }
}

impl FromIterator<(String, Value)> for InputMemory {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<InputMemory> for NewMemory {
    type Error = MemoryError;

    fn try_from(input: InputMemory) -> Result<Self, Self::Error> {
        input.into_memory()
    }
}
