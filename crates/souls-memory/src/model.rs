//! Memory record model shared with memory stores.

use crate::content::Content;
use crate::role::Role;
use chrono::{DateTime, Utc};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;
use uuid::Uuid;

/// Keys with a fixed meaning on the wire. They never appear in the
/// extension map of a [`NewMemory`].
pub const RESERVED_KEYS: [&str; 7] = [
    "role",
    "content",
    "name",
    "region",
    "metadata",
    "_id",
    "_timestamp",
];

/// Memory record before a store assigns identity.
///
/// Keys outside the recognized fields are kept in the extension map and
/// written back alongside the known fields, so the record stays an open
/// mapping on the wire. `_id` and `_timestamp` belong to the store and are
/// dropped when a record is read.
///
/// An explicit `null` on `name`, `region` or `metadata` reads as absent and
/// is omitted when written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "NewMemoryFields")]
pub struct NewMemory {
    /// Speaker of the message.
    pub role: Role,
    /// Message body.
    pub content: Content,
    /// Optional sender label, e.g. the function that produced a result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Caller-defined classification tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Caller-defined auxiliary data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Wire form read before store-owned keys are dropped.
#[derive(Deserialize)]
struct NewMemoryFields {
    role: Role,
    content: Content,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<NewMemoryFields> for NewMemory {
    fn from(fields: NewMemoryFields) -> Self {
        let mut extra = fields.extra;
        for key in ["_id", "_timestamp"] {
            if extra.remove(key).is_some() {
                debug!("dropped store-owned key from memory input (key={key})");
            }
        }
        Self {
            role: fields.role,
            content: fields.content,
            name: fields.name,
            region: fields.region,
            metadata: fields.metadata,
            extra,
        }
    }
}

impl NewMemory {
    pub fn new(role: Role, content: impl Into<Content>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
            region: None,
            metadata: None,
            extra: Map::new(),
        }
    }

    pub fn system(content: impl Into<Content>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<Content>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<Content>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Function result attributed to `name`.
    pub fn function(name: impl Into<String>, content: impl Into<Content>) -> Self {
        Self::new(Role::Function, content).with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Insert one metadata entry, creating the map if needed.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Insert one unrecognized key. Keys in [`RESERVED_KEYS`] are ignored.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            debug!("ignored reserved key in memory extension (key={key})");
            return self;
        }
        self.extra.insert(key, value.into());
        self
    }

    /// Unrecognized keys carried with the record.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Remove one unrecognized key.
    pub fn remove_extra(&mut self, key: &str) -> Option<Value> {
        self.extra.remove(key)
    }
}

/// Memory record after a store assigned identity and creation time.
///
/// `timestamp` is milliseconds since the Unix epoch (UTC).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredMemory {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation time in Unix milliseconds.
    #[serde(rename = "_timestamp")]
    pub timestamp: i64,
    /// Record fields.
    #[serde(flatten)]
    pub memory: NewMemory,
}

/// Stored memory record.
pub type Memory = StoredMemory;

impl StoredMemory {
    pub fn new(memory: NewMemory, id: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: id.into(),
            timestamp,
            memory,
        }
    }

    /// Assign a random UUID and the current time.
    pub fn stamp(memory: NewMemory) -> Self {
        let id = Uuid::new_v4().to_string();
        let timestamp = Utc::now().timestamp_millis();
        trace!("stamped memory (id={id}, role={})", memory.role);
        Self::new(memory, id, timestamp)
    }

    /// Creation time, if `timestamp` is in chrono's representable range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Drop store identity.
    pub fn into_new(self) -> NewMemory {
        self.memory
    }
}

impl Deref for StoredMemory {
    type Target = NewMemory;

    fn deref(&self) -> &Self::Target {
        &self.memory
    }
}
