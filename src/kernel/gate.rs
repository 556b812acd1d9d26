//! Authorization gate — exact-match principal check
//!
//! Principals arrive already authenticated; the gate only compares them
//! against the principal stored on a record. No roles, no delegation.

use crate::error::{RecordKind, RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated caller identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Principal {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Allow `caller` only if it is `owner`.
///
/// `owner` is optional so that a missing record collapses into a denial,
/// which is how token transfer treats unknown ids.
pub fn authorize(
    owner: Option<&Principal>,
    caller: &Principal,
    kind: RecordKind,
    id: u64,
) -> Result<()> {
    match owner {
        Some(owner) if owner == caller => Ok(()),
        _ => Err(RegistryError::Unauthorized {
            kind,
            id,
            caller: caller.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_allowed() {
        let owner = Principal::from("researcher1");
        assert!(authorize(Some(&owner), &"researcher1".into(), RecordKind::Model, 1).is_ok());
    }

    #[test]
    fn test_other_caller_denied() {
        let owner = Principal::from("researcher1");
        let err = authorize(Some(&owner), &"intruder".into(), RecordKind::Model, 1).unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { id: 1, .. }));
    }

    #[test]
    fn test_match_is_exact() {
        let owner = Principal::from("Researcher1");
        assert!(authorize(Some(&owner), &"researcher1".into(), RecordKind::Model, 1).is_err());
        assert!(authorize(Some(&owner), &"Researcher1 ".into(), RecordKind::Model, 1).is_err());
    }

    #[test]
    fn test_absent_owner_denied() {
        let err = authorize(None, &"anyone".into(), RecordKind::Token, 9).unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Unauthorized { kind: RecordKind::Token, id: 9, .. }
        ));
    }

    #[test]
    fn test_principal_serializes_as_string() {
        let p = Principal::from("discoverer1");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"discoverer1\"");
    }
}
