//! Chat message and memory record shapes shared between a soul engine and
//! chat-completion providers.

pub mod chat;
pub mod content;
pub mod error;
pub mod input;
pub mod model;
pub mod role;

/// Chat-completion message projection.
pub use chat::ChatMessage;
/// Message body types.
pub use content::{Content, ContentPart, ImageUrl};
/// Memory error type.
pub use error::MemoryError;
/// Loose, schemaless memory input.
pub use input::InputMemory;
/// Memory record model.
pub use model::{Memory, NewMemory, RESERVED_KEYS, StoredMemory};
/// Message author roles.
pub use role::Role;
