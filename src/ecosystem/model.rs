use crate::kernel::{Principal, Timestamp};
use serde::{Deserialize, Serialize};

/// A simulated ecosystem owned by its creator.
///
/// Only `description`, `complexity` and `updated_at` change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcosystemModel {
    pub id: u64,
    pub creator: Principal,
    pub name: String,
    pub description: String,
    pub universe_id: i64,
    pub complexity: i64,
    pub created_at: Timestamp,
    /// Never earlier than `created_at`
    pub updated_at: Timestamp,
}

/// An append-only event recorded against an existing model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcosystemInteraction {
    pub id: u64,
    pub model_id: u64,
    pub interactor: Principal,
    pub action: String,
    /// Signed and unbounded
    pub impact: i64,
    pub timestamp: Timestamp,
}
