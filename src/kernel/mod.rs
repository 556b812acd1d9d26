//! Registry kernel — the pieces both registries are built from
//!
//! Id allocation, an id-keyed record store, the principal check that gates
//! mutation, and the clock that stamps records.

mod allocator;
mod store;
mod gate;
mod clock;

pub use allocator::IdAllocator;
pub use store::RecordStore;
pub use gate::{authorize, Principal};
pub use clock::{ManualClock, SystemClock, TimeSource, Timestamp};
