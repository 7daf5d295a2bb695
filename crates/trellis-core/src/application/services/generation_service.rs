//! Generation Service - main application orchestrator.
//!
//! 1. Look up the blueprint for the configuration's key
//! 2. Resolve the file set and assemble the manifest
//! 3. Validate the two against each other
//! 4. Emit, only if validation found no errors

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::ports::{BlueprintStore, Emitter},
    domain::{
        self, Advisory, BlueprintKey, DependencyManifest, MANIFEST_PATH, ProjectConfig,
        ResolvedFileSet, TableDefect, VersionTable,
    },
    error::TrellisResult,
};

/// A fully validated generation result, ready to emit.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub config: ProjectConfig,
    pub files: ResolvedFileSet,
    pub manifest: DependencyManifest,
    pub advisories: Vec<Advisory>,
}

impl GenerationPlan {
    /// Rendered `package.json` text.
    pub fn package_json(&self) -> String {
        self.manifest.render_package_json(&self.config)
    }

    /// Every output as `(relative path, content)`, the manifest last.
    pub fn outputs(&self) -> Vec<(&str, std::borrow::Cow<'_, str>)> {
        let mut out: Vec<_> = self
            .files
            .iter()
            .map(|f| (f.path.as_str(), std::borrow::Cow::Borrowed(f.content.as_str())))
            .collect();
        out.push((MANIFEST_PATH, std::borrow::Cow::Owned(self.package_json())));
        out
    }
}

/// Main generation service.
pub struct GenerationService {
    store: Box<dyn BlueprintStore>,
    versions: VersionTable,
    emitter: Box<dyn Emitter>,
}

impl GenerationService {
    pub fn new(
        store: Box<dyn BlueprintStore>,
        versions: VersionTable,
        emitter: Box<dyn Emitter>,
    ) -> Self {
        Self {
            store,
            versions,
            emitter,
        }
    }

    /// Resolve, assemble and validate without touching the output.
    #[instrument(skip_all, fields(config = %config))]
    pub fn plan(&self, config: &ProjectConfig) -> TrellisResult<GenerationPlan> {
        let blueprint = self.store.get(config.key())?;
        info!(blueprint = %blueprint.key(), "Blueprint resolved");

        let files = domain::resolve(&blueprint, config)?;
        let manifest = domain::assemble(&blueprint, config, &self.versions)?;
        info!(files = files.len(), packages = manifest.len(), "Plan assembled");

        let advisories = domain::validate(&files, &manifest).into_result()?;
        for advisory in &advisories {
            warn!(%advisory, "Advisory");
        }

        Ok(GenerationPlan {
            config: config.clone(),
            files,
            manifest,
            advisories,
        })
    }

    /// Write an already validated plan under `root`, unchanged.
    #[instrument(skip_all, fields(config = %plan.config, root = %root.as_ref().display()))]
    pub fn emit(&self, plan: &GenerationPlan, root: impl AsRef<Path>) -> TrellisResult<()> {
        self.emitter.write(plan, root.as_ref())?;
        info!("Generation completed successfully");
        Ok(())
    }

    /// Plan, then write the plan under `root`.
    pub fn generate(
        &self,
        config: &ProjectConfig,
        root: impl AsRef<Path>,
    ) -> TrellisResult<GenerationPlan> {
        let plan = self.plan(config)?;
        self.emit(&plan, root)?;
        Ok(plan)
    }

    /// Check every blueprint in the store against the version table.
    pub fn audit(&self) -> TrellisResult<Vec<(BlueprintKey, TableDefect)>> {
        let mut defects = Vec::new();
        for blueprint in self.store.list()? {
            for defect in domain::audit(&blueprint, &self.versions) {
                warn!(blueprint = %blueprint.key(), %defect, "Table defect");
                defects.push((blueprint.key(), defect));
            }
        }
        Ok(defects)
    }
}
