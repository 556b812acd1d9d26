//! Ecosystem models and the interactions recorded against them
//!
//! A model is owned by the principal that created it. An interaction is a
//! log entry that must reference a model existing at the time it is written.

mod model;
mod registry;

pub use model::{EcosystemInteraction, EcosystemModel};
pub use registry::{EcosystemRegistry, EcosystemStats};
