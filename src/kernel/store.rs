//! Record store — id-keyed records with create and in-place replace
//!
//! There is no delete. A key, once inserted, stays for the life of the store.

use crate::error::{RecordKind, RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordStore<R> {
    kind: RecordKind,
    records: BTreeMap<u64, R>,
}

impl<R> RecordStore<R> {
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            records: BTreeMap::new(),
        }
    }

    /// Insert a freshly allocated record
    pub fn insert(&mut self, id: u64, record: R) {
        self.records.insert(id, record);
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    /// Look up a record, turning absence into `NotFound`
    pub fn require(&self, id: u64) -> Result<&R> {
        self.records.get(&id).ok_or(RegistryError::NotFound {
            kind: self.kind,
            id,
        })
    }

    /// Overwrite an existing record, keeping its key
    pub fn replace(&mut self, id: u64, record: R) -> Result<()> {
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RegistryError::NotFound {
                kind: self.kind,
                id,
            }),
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &R)> {
        self.records.iter().map(|(id, r)| (*id, r))
    }
}
