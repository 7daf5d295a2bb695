//! Catalog Service - blueprint discovery for display.

use serde::Serialize;

use crate::{
    application::ports::BlueprintStore,
    domain::{Blueprint, predicates::ALWAYS},
    error::TrellisResult,
};

/// Information about a blueprint for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlueprintInfo {
    pub id: String,
    pub platform: String,
    pub state: String,
    pub toolchain: String,
    pub description: String,
    /// Files emitted for the bare configuration.
    pub baseline_files: usize,
    /// Files available behind feature toggles.
    pub optional_files: usize,
    /// Predicate names that gate optional files, in first-seen order.
    pub features: Vec<String>,
}

impl From<&Blueprint> for BlueprintInfo {
    fn from(bp: &Blueprint) -> Self {
        let key = bp.key();
        let mut features: Vec<String> = Vec::new();
        let mut baseline_files = 0;
        for entry in bp.entries() {
            let predicate = entry.spec.include;
            if predicate.is(&ALWAYS) {
                baseline_files += 1;
            } else if !features.iter().any(|f| f == predicate.name) {
                features.push(predicate.name.to_string());
            }
        }

        Self {
            id: key.to_string(),
            platform: key.platform.to_string(),
            state: key.state.to_string(),
            toolchain: key.platform.toolchain().to_string(),
            description: bp.description().to_string(),
            baseline_files,
            optional_files: bp.entries().len() - baseline_files,
            features,
        }
    }
}

/// Read-only view over a blueprint store.
pub struct CatalogService {
    store: Box<dyn BlueprintStore>,
}

impl CatalogService {
    pub fn new(store: Box<dyn BlueprintStore>) -> Self {
        Self { store }
    }

    /// List every available blueprint.
    pub fn list(&self) -> TrellisResult<Vec<BlueprintInfo>> {
        Ok(self.store.list()?.iter().map(BlueprintInfo::from).collect())
    }
}
