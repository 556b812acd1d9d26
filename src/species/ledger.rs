//! Species Ledger — non-fungible species tokens with owner-gated transfer
//!
//! Metadata is written once at mint. The current owner of each token is
//! tracked in its own store and reassigned wholesale on transfer.

use super::token::SpeciesToken;
use crate::config::LedgerConfig;
use crate::error::{RecordKind, Result};
use crate::kernel::{authorize, IdAllocator, Principal, RecordStore, SystemClock, TimeSource};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Counters describing the ledger state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_tokens: usize,
    pub last_token_id: u64,
    pub distinct_owners: usize,
}

pub struct SpeciesLedger {
    token_ids: IdAllocator,
    tokens: RecordStore<SpeciesToken>,
    owners: RecordStore<Principal>,
    config: LedgerConfig,
    clock: Arc<dyn TimeSource>,
}

impl SpeciesLedger {
    /// Create an empty ledger stamped by the system clock
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default(), Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn TimeSource>) -> Self {
        Self::with_config(LedgerConfig::default(), clock)
    }

    pub fn with_config(config: LedgerConfig, clock: Arc<dyn TimeSource>) -> Self {
        Self {
            token_ids: IdAllocator::new(),
            tokens: RecordStore::new(RecordKind::Token),
            owners: RecordStore::new(RecordKind::Token),
            config,
            clock,
        }
    }

    /// Mint a new token owned by its creator. Every call yields a fresh id,
    /// even for identical arguments.
    pub fn mint_species(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        universe_id: i64,
        rarity: i64,
        image_url: impl Into<String>,
        creator: impl Into<Principal>,
    ) -> u64 {
        let creator = creator.into();
        let discovered_at = self.clock.now();
        let id = self.token_ids.next();
        let token = SpeciesToken {
            id,
            creator: creator.clone(),
            name: name.into(),
            description: description.into(),
            universe_id,
            rarity,
            discovered_at,
            image_url: image_url.into(),
        };
        info!(
            "Minted species {} '{}' (universe {}, rarity {}) to {}",
            id, token.name, universe_id, rarity, creator
        );
        self.tokens.insert(id, token);
        self.owners.insert(id, creator);
        id
    }

    /// Hand a token from `sender` to `recipient`.
    ///
    /// Succeeds only if `sender` currently owns the token. An unknown id has
    /// no owner and is therefore reported as `Unauthorized`, unless the
    /// ledger is configured with `explicit_transfer_not_found`.
    pub fn transfer_species(
        &mut self,
        token_id: u64,
        sender: impl Into<Principal>,
        recipient: impl Into<Principal>,
    ) -> Result<bool> {
        let sender = sender.into();
        if self.config.explicit_transfer_not_found {
            self.owners
                .require(token_id)
                .inspect_err(|e| warn!("Rejected transfer: {}", e))?;
        }
        authorize(self.owners.get(token_id), &sender, RecordKind::Token, token_id)
            .inspect_err(|e| warn!("Rejected transfer: {}", e))?;

        let recipient = recipient.into();
        self.owners.replace(token_id, recipient.clone())?;
        info!("Transferred species {} from {} to {}", token_id, sender, recipient);
        Ok(true)
    }

    pub fn token(&self, id: u64) -> Option<&SpeciesToken> {
        self.tokens.get(id)
    }

    pub fn owner_of(&self, id: u64) -> Option<&Principal> {
        self.owners.get(id)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.count()
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn stats(&self) -> LedgerStats {
        let mut owners: Vec<&Principal> = self.owners.iter().map(|(_, p)| p).collect();
        owners.sort();
        owners.dedup();
        LedgerStats {
            total_tokens: self.tokens.count(),
            last_token_id: self.token_ids.last(),
            distinct_owners: owners.len(),
        }
    }

    pub fn summary(&self) -> String {
        let stats = self.stats();
        format!(
            "SpeciesLedger | {} tokens | {} owners",
            stats.total_tokens, stats.distinct_owners
        )
    }
}

impl Default for SpeciesLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::kernel::ManualClock;
    use rand::seq::SliceRandom;
    use rand::Rng;

    fn ledger() -> SpeciesLedger {
        let _ = env_logger::builder().is_test(true).try_init();
        SpeciesLedger::with_clock(Arc::new(ManualClock::new(42_000)))
    }

    #[test]
    fn test_mint_species() {
        let mut ledger = ledger();
        let id = ledger.mint_species(
            "Luminous Floater",
            "A bioluminescent floating creature",
            5,
            8,
            "https://example.com/luminous-floater.jpg",
            "discoverer1",
        );
        assert_eq!(id, 1);
        let token = ledger.token(id).unwrap();
        assert_eq!(token.name, "Luminous Floater");
        assert_eq!(token.universe_id, 5);
        assert_eq!(token.rarity, 8);
        assert_eq!(token.discovered_at, 42_000);
        assert_eq!(token.image_url, "https://example.com/luminous-floater.jpg");
        assert_eq!(ledger.owner_of(id).unwrap().as_str(), "discoverer1");
    }

    #[test]
    fn test_mint_is_not_idempotent() {
        let mut ledger = ledger();
        let a = ledger.mint_species("Twin", "Same", 1, 1, "u", "d");
        let b = ledger.mint_species("Twin", "Same", 1, 1, "u", "d");
        assert_eq!((a, b), (1, 2));
        assert_eq!(ledger.token_count(), 2);
    }

    #[test]
    fn test_transfer_species() {
        let mut ledger = ledger();
        let id = ledger.mint_species(
            "Quantum Shifter",
            "A creature that exists in multiple states simultaneously",
            7,
            10,
            "https://example.com/quantum-shifter.gif",
            "discoverer2",
        );
        assert!(ledger.transfer_species(id, "discoverer2", "collector1").unwrap());
        assert_eq!(ledger.owner_of(id).unwrap().as_str(), "collector1");
        // Metadata is untouched by ownership changes
        assert_eq!(ledger.token(id).unwrap().creator.as_str(), "discoverer2");
    }

    #[test]
    fn test_unauthorized_transfer() {
        let mut ledger = ledger();
        let id = ledger.mint_species(
            "Chronovore",
            "A being that feeds on temporal energy",
            3,
            9,
            "https://example.com/chronovore.png",
            "discoverer3",
        );
        let err = ledger
            .transfer_species(id, "unauthorized_user", "collector2")
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Unauthorized { kind: RecordKind::Token, .. }
        ));
        assert_eq!(ledger.owner_of(id).unwrap().as_str(), "discoverer3");
    }

    #[test]
    fn test_old_owner_cannot_transfer_again() {
        let mut ledger = ledger();
        let id = ledger.mint_species("Luminous Floater", "glows", 5, 8, "u", "discoverer1");
        ledger.transfer_species(id, "discoverer1", "collector1").unwrap();
        let err = ledger
            .transfer_species(id, "discoverer1", "collector2")
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized { id: 1, .. }));
        assert_eq!(ledger.owner_of(id).unwrap().as_str(), "collector1");
    }

    #[test]
    fn test_transfer_unknown_token_is_unauthorized() {
        let mut ledger = ledger();
        let err = ledger.transfer_species(99, "anyone", "collector").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Unauthorized { kind: RecordKind::Token, id: 99, .. }
        ));
        assert!(ledger.owner_of(99).is_none());
    }

    #[test]
    fn test_transfer_unknown_token_explicit_not_found() {
        let config = LedgerConfig {
            explicit_transfer_not_found: true,
        };
        let mut ledger = SpeciesLedger::with_config(config, Arc::new(ManualClock::new(0)));
        let err = ledger.transfer_species(99, "anyone", "collector").unwrap_err();
        assert_eq!(
            err,
            RegistryError::NotFound {
                kind: RecordKind::Token,
                id: 99
            }
        );

        let id = ledger.mint_species("Drifter", "d", 1, 1, "u", "owner");
        assert!(matches!(
            ledger.transfer_species(id, "thief", "thief"),
            Err(RegistryError::Unauthorized { .. })
        ));
        assert!(ledger.transfer_species(id, "owner", "buyer").unwrap());
    }

    #[test]
    fn test_transfer_to_self() {
        let mut ledger = ledger();
        let id = ledger.mint_species("Mirror Eel", "reflective", 2, 4, "u", "keeper");
        assert!(ledger.transfer_species(id, "keeper", "keeper").unwrap());
        assert_eq!(ledger.owner_of(id).unwrap().as_str(), "keeper");
    }

    #[test]
    fn test_random_transfers_track_single_owner() {
        let mut ledger = ledger();
        let mut rng = rand::thread_rng();
        let people = ["ada", "bo", "cy", "di"];
        let mut expected: Vec<&str> = Vec::new();

        for _ in 0..20 {
            let creator = *people.choose(&mut rng).unwrap();
            let id = ledger.mint_species("s", "d", 0, rng.gen(), "u", creator);
            assert_eq!(id, expected.len() as u64 + 1);
            expected.push(creator);
        }

        for _ in 0..300 {
            let id = rng.gen_range(1..=expected.len() as u64 + 1);
            let sender = *people.choose(&mut rng).unwrap();
            let recipient = *people.choose(&mut rng).unwrap();
            let owner = expected.get(id as usize - 1).copied();
            let result = ledger.transfer_species(id, sender, recipient);
            if owner == Some(sender) {
                assert!(result.unwrap());
                expected[id as usize - 1] = recipient;
            } else {
                assert!(matches!(result, Err(RegistryError::Unauthorized { .. })));
            }
        }

        for (idx, owner) in expected.iter().enumerate() {
            assert_eq!(ledger.owner_of(idx as u64 + 1).unwrap().as_str(), *owner);
        }
        assert_eq!(ledger.stats().last_token_id, 20);
    }

    #[test]
    fn test_stats() {
        let mut ledger = ledger();
        let a = ledger.mint_species("a", "a", 1, 1, "u", "p1");
        ledger.mint_species("b", "b", 1, 1, "u", "p2");
        ledger.transfer_species(a, "p1", "p2").unwrap();
        let stats = ledger.stats();
        assert_eq!(stats.total_tokens, 2);
        assert_eq!(stats.distinct_owners, 1);
        assert!(ledger.summary().contains("2 tokens"));
    }
}
