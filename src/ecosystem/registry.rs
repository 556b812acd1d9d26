//! Ecosystem Registry — creator-gated models plus an interaction log
//!
//! Models may only be edited by their creator. Interactions may be recorded
//! by anyone, as long as the model they point at exists at that moment.

use super::model::{EcosystemInteraction, EcosystemModel};
use crate::error::{RecordKind, Result};
use crate::kernel::{authorize, IdAllocator, Principal, RecordStore, SystemClock, TimeSource};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Counters describing the registry state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcosystemStats {
    pub total_models: usize,
    pub total_interactions: usize,
    pub last_model_id: u64,
    pub last_interaction_id: u64,
}

pub struct EcosystemRegistry {
    model_ids: IdAllocator,
    interaction_ids: IdAllocator,
    models: RecordStore<EcosystemModel>,
    interactions: RecordStore<EcosystemInteraction>,
    clock: Arc<dyn TimeSource>,
}

impl EcosystemRegistry {
    /// Create an empty registry stamped by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn TimeSource>) -> Self {
        Self {
            model_ids: IdAllocator::new(),
            interaction_ids: IdAllocator::new(),
            models: RecordStore::new(RecordKind::Model),
            interactions: RecordStore::new(RecordKind::Interaction),
            clock,
        }
    }

    /// Register a new model. Field values are accepted as given.
    pub fn create_model(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        universe_id: i64,
        complexity: i64,
        creator: impl Into<Principal>,
    ) -> u64 {
        let now = self.clock.now();
        let id = self.model_ids.next();
        let model = EcosystemModel {
            id,
            creator: creator.into(),
            name: name.into(),
            description: description.into(),
            universe_id,
            complexity,
            created_at: now,
            updated_at: now,
        };
        info!(
            "Created model {} '{}' (universe {}) by {}",
            id, model.name, model.universe_id, model.creator
        );
        self.models.insert(id, model);
        id
    }

    /// Replace a model's description and complexity.
    ///
    /// Fails with `NotFound` for an unknown id and `Unauthorized` when
    /// `updater` is not the creator.
    pub fn update_model(
        &mut self,
        model_id: u64,
        description: impl Into<String>,
        complexity: i64,
        updater: impl Into<Principal>,
    ) -> Result<bool> {
        let updater = updater.into();
        let current = self
            .models
            .require(model_id)
            .inspect_err(|e| warn!("Rejected update: {}", e))?;
        authorize(Some(&current.creator), &updater, RecordKind::Model, model_id)
            .inspect_err(|e| warn!("Rejected update: {}", e))?;

        let updated = EcosystemModel {
            description: description.into(),
            complexity,
            // An injected clock may run backwards; the stamp must not.
            updated_at: self.clock.now().max(current.updated_at),
            ..current.clone()
        };
        self.models.replace(model_id, updated)?;
        info!("Updated model {} by {}", model_id, updater);
        Ok(true)
    }

    /// Append an interaction against an existing model. Any caller may do so.
    pub fn record_interaction(
        &mut self,
        model_id: u64,
        action: impl Into<String>,
        impact: i64,
        interactor: impl Into<Principal>,
    ) -> Result<u64> {
        let interactor = interactor.into();
        if let Err(e) = self.models.require(model_id) {
            warn!("Rejected interaction by {}: {}", interactor, e);
            return Err(e);
        }

        let id = self.interaction_ids.next();
        let interaction = EcosystemInteraction {
            id,
            model_id,
            interactor,
            action: action.into(),
            impact,
            timestamp: self.clock.now(),
        };
        debug!(
            "Recorded interaction {} on model {}: '{}' ({:+})",
            id, model_id, interaction.action, interaction.impact
        );
        self.interactions.insert(id, interaction);
        Ok(id)
    }

    pub fn model(&self, id: u64) -> Option<&EcosystemModel> {
        self.models.get(id)
    }

    pub fn interaction(&self, id: u64) -> Option<&EcosystemInteraction> {
        self.interactions.get(id)
    }

    pub fn model_count(&self) -> usize {
        self.models.count()
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions.count()
    }

    pub fn stats(&self) -> EcosystemStats {
        EcosystemStats {
            total_models: self.models.count(),
            total_interactions: self.interactions.count(),
            last_model_id: self.model_ids.last(),
            last_interaction_id: self.interaction_ids.last(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "EcosystemRegistry | {} models | {} interactions",
            self.models.count(),
            self.interactions.count()
        )
    }
}

impl Default for EcosystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
