//! Registry errors

use crate::kernel::Principal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which collection an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Model,
    Interaction,
    Token,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Model => "ecosystem model",
            RecordKind::Interaction => "ecosystem interaction",
            RecordKind::Token => "species token",
        };
        f.write_str(name)
    }
}

/// Failures returned by registry operations.
///
/// Both are deterministic outcomes of the stored state, never transient, and
/// a failed operation has written nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: u64 },

    #[error("{caller} is not authorized to modify {kind} {id}")]
    Unauthorized {
        kind: RecordKind,
        id: u64,
        caller: Principal,
    },
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors loading a [`LedgerConfig`](crate::config::LedgerConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
