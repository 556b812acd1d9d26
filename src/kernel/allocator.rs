//! Id allocation — one monotonic counter per collection

use serde::{Deserialize, Serialize};

/// Issues strictly increasing ids starting at 1.
///
/// Callers allocate only after every precondition of an operation has
/// passed, so a rejected operation never consumes an id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter and return the new id
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The most recently issued id (0 if none)
    pub fn last(&self) -> u64 {
        self.last
    }
}
