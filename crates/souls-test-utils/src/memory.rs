use souls_memory::{InputMemory, MemoryError, NewMemory, StoredMemory};
use std::cell::Cell;

/// Deterministic stand-in for an external memory store.
///
/// Ids are `mem-<n>` and timestamps start at `start_ms`, advancing by
/// `step_ms` per record.
#[derive(Debug)]
pub struct StubStore {
    next: Cell<i64>,
    start_ms: i64,
    step_ms: i64,
}

impl StubStore {
    pub fn new() -> Self {
        Self::with_clock(1_700_000_000_000, 1_000)
    }

    pub fn with_clock(start_ms: i64, step_ms: i64) -> Self {
        Self {
            next: Cell::new(0),
            start_ms,
            step_ms,
        }
    }

    pub fn store(&self, memory: NewMemory) -> StoredMemory {
        let n = self.next.get();
        self.next.set(n + 1);
        StoredMemory::new(
            memory,
            format!("mem-{}", n + 1),
            self.start_ms + n * self.step_ms,
        )
    }

    pub fn store_input(&self, input: InputMemory) -> Result<StoredMemory, MemoryError> {
        Ok(self.store(input.into_memory()?))
    }
}

impl Default for StubStore {
    fn default() -> Self {
        Self::new()
    }
}
