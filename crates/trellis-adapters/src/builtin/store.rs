//! Blueprint store backed by the built-in catalog.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tracing::debug;
use trellis_core::{
    application::{ApplicationError, ports::BlueprintStore},
    domain::{Blueprint, BlueprintKey},
    error::TrellisResult,
};

use super::catalog;

/// Thread-safe blueprint store.
#[derive(Clone, Default)]
pub struct BuiltinStore {
    inner: Arc<RwLock<BTreeMap<BlueprintKey, Blueprint>>>,
}

impl BuiltinStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding all six built-in blueprints.
    pub fn with_builtin() -> TrellisResult<Self> {
        let store = Self::new();
        for blueprint in catalog::all()? {
            store.insert(blueprint)?;
        }
        Ok(store)
    }

    /// Add or replace the blueprint for its key.
    pub fn insert(&self, blueprint: Blueprint) -> TrellisResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        debug!(
            key = %blueprint.key(),
            entries = blueprint.entries().len(),
            "registering blueprint"
        );
        inner.insert(blueprint.key(), blueprint);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlueprintStore for BuiltinStore {
    fn get(&self, key: BlueprintKey) -> TrellisResult<Blueprint> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.get(&key).cloned().ok_or_else(|| key.unknown().into())
    }

    fn list(&self) -> TrellisResult<Vec<Blueprint>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.values().cloned().collect())
    }
}
