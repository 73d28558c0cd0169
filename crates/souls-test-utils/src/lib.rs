//! Test helpers shared across souls crates.

pub mod fixtures;
pub mod memory;

pub use fixtures::{multipart_memory, region_input, sample_conversation};
pub use memory::StubStore;
