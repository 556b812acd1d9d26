//! Multiverse registries
//!
//! Two sibling state machines built from the same kernel: an ecosystem
//! registry of creator-owned models with an interaction log, and a species
//! ledger of non-fungible tokens with owner-gated transfer. Callers hand in
//! already-authenticated principals and get back ids or typed errors.

pub mod kernel;
pub mod error;
pub mod config;
pub mod ecosystem;
pub mod species;
pub mod multiverse;

pub use kernel::{ManualClock, Principal, SystemClock, TimeSource, Timestamp};
pub use error::{ConfigError, RecordKind, RegistryError, Result};
pub use config::LedgerConfig;
pub use ecosystem::{EcosystemInteraction, EcosystemModel, EcosystemRegistry};
pub use species::{SpeciesLedger, SpeciesToken};
pub use multiverse::{Multiverse, MultiverseHandle};
