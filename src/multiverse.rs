//! Multiverse — both registries behind one clock, and a shared handle
//!
//! `Multiverse` owns an [`EcosystemRegistry`] and a [`SpeciesLedger`] that
//! stamp records from the same time source. `MultiverseHandle` puts it behind
//! an async mutex so several tasks can drive it; each operation runs entirely
//! under one lock acquisition, so no caller ever sees a half-applied write.

use crate::config::LedgerConfig;
use crate::ecosystem::{EcosystemInteraction, EcosystemModel, EcosystemRegistry};
use crate::error::Result;
use crate::kernel::{Principal, SystemClock, TimeSource};
use crate::species::{SpeciesLedger, SpeciesToken};
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct Multiverse {
    pub ecosystem: EcosystemRegistry,
    pub species: SpeciesLedger,
}

impl Multiverse {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default(), Arc::new(SystemClock))
    }

    pub fn with_config(config: LedgerConfig, clock: Arc<dyn TimeSource>) -> Self {
        info!("Opening multiverse registries with {:?}", config);
        Self {
            ecosystem: EcosystemRegistry::with_clock(clock.clone()),
            species: SpeciesLedger::with_config(config, clock),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} | {}", self.ecosystem.summary(), self.species.summary())
    }
}

impl Default for Multiverse {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable, lock-guarded access to a [`Multiverse`]
#[derive(Clone)]
pub struct MultiverseHandle {
    inner: Arc<Mutex<Multiverse>>,
}

impl MultiverseHandle {
    pub fn new(multiverse: Multiverse) -> Self {
        Self {
            inner: Arc::new(Mutex::new(multiverse)),
        }
    }

    pub async fn create_model(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        universe_id: i64,
        complexity: i64,
        creator: impl Into<Principal>,
    ) -> u64 {
        let mut mv = self.inner.lock().await;
        mv.ecosystem
            .create_model(name, description, universe_id, complexity, creator)
    }

    pub async fn update_model(
        &self,
        model_id: u64,
        description: impl Into<String>,
        complexity: i64,
        updater: impl Into<Principal>,
    ) -> Result<bool> {
        let mut mv = self.inner.lock().await;
        mv.ecosystem
            .update_model(model_id, description, complexity, updater)
    }

    pub async fn record_interaction(
        &self,
        model_id: u64,
        action: impl Into<String>,
        impact: i64,
        interactor: impl Into<Principal>,
    ) -> Result<u64> {
        let mut mv = self.inner.lock().await;
        mv.ecosystem
            .record_interaction(model_id, action, impact, interactor)
    }

    pub async fn mint_species(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        universe_id: i64,
        rarity: i64,
        image_url: impl Into<String>,
        creator: impl Into<Principal>,
    ) -> u64 {
        let mut mv = self.inner.lock().await;
        mv.species
            .mint_species(name, description, universe_id, rarity, image_url, creator)
    }

    pub async fn transfer_species(
        &self,
        token_id: u64,
        sender: impl Into<Principal>,
        recipient: impl Into<Principal>,
    ) -> Result<bool> {
        let mut mv = self.inner.lock().await;
        mv.species.transfer_species(token_id, sender, recipient)
    }

    pub async fn model(&self, id: u64) -> Option<EcosystemModel> {
        self.inner.lock().await.ecosystem.model(id).cloned()
    }

    pub async fn interaction(&self, id: u64) -> Option<EcosystemInteraction> {
        self.inner.lock().await.ecosystem.interaction(id).cloned()
    }

    pub async fn token(&self, id: u64) -> Option<SpeciesToken> {
        self.inner.lock().await.species.token(id).cloned()
    }

    pub async fn owner_of(&self, id: u64) -> Option<Principal> {
        self.inner.lock().await.species.owner_of(id).cloned()
    }

    pub async fn summary(&self) -> String {
        self.inner.lock().await.summary()
    }
}
