//! The `ProjectConfig` aggregate and its typestate builder.
//!
//! A `ProjectConfig` is the validated, immutable record of every choice the
//! user made. Once one exists it is guaranteed consistent, and the rest of
//! the pipeline only ever reads it.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoPlatform` / `HasPlatform`)
//! to enforce at *compile time* that a platform is chosen before anything is
//! built. Cross-field rules (analytics provider without the analytics toggle,
//! two providers at once, malformed names) are checked at `build()`, and
//! every violation is reported in one `ConfigValidation` error.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::domain::{
    entities::blueprint::BlueprintKey,
    error::DomainError,
    value_objects::{AnalyticsProvider, Platform, StateManagement},
};

// ── Feature toggles ───────────────────────────────────────────────────────────

/// An optional feature that can be switched on or off independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Api,
    Persistence,
    Analytics,
    Pagination,
    Accessibility,
    Localization,
    Env,
    Tests,
}

impl Feature {
    pub const ALL: [Feature; 8] = [
        Self::Api,
        Self::Persistence,
        Self::Analytics,
        Self::Pagination,
        Self::Accessibility,
        Self::Localization,
        Self::Env,
        Self::Tests,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Persistence => "persistence",
            Self::Analytics => "analytics",
            Self::Pagination => "pagination",
            Self::Accessibility => "accessibility",
            Self::Localization => "localization",
            Self::Env => "env",
            Self::Tests => "tests",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved set of optional features.
///
/// Analytics and its provider are one field: a provider cannot exist
/// without the toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FeatureSet {
    pub api: bool,
    pub persistence: bool,
    pub analytics: Option<AnalyticsProvider>,
    pub pagination: bool,
    pub accessibility: bool,
    pub localization: bool,
    pub env: bool,
    pub tests: bool,
}

impl FeatureSet {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Api => self.api,
            Feature::Persistence => self.persistence,
            Feature::Analytics => self.analytics.is_some(),
            Feature::Pagination => self.pagination,
            Feature::Accessibility => self.accessibility,
            Feature::Localization => self.localization,
            Feature::Env => self.env,
            Feature::Tests => self.tests,
        }
    }

    /// Enabled features in declaration order.
    pub fn enabled(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.is_enabled(*f))
            .collect()
    }
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated generation request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectConfig {
    name: String,
    platform: Platform,
    state: StateManagement,
    features: FeatureSet,
}

impl ProjectConfig {
    /// Start building a new `ProjectConfig`.
    pub fn builder() -> ProjectConfigBuilder<NoPlatform> {
        ProjectConfigBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name as npm accepts it: lowercase, `_` turned into `-`.
    /// `My_App` becomes `my-app`.
    pub fn package_name(&self) -> String {
        self.name.to_ascii_lowercase().replace('_', "-")
    }
    pub const fn platform(&self) -> Platform {
        self.platform
    }
    pub const fn state(&self) -> StateManagement {
        self.state
    }
    pub const fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Key of the blueprint table this configuration resolves against.
    pub const fn key(&self) -> BlueprintKey {
        BlueprintKey::new(self.platform, self.state)
    }

    /// Re-check the invariants the builder enforces.
    ///
    /// The resolver calls this before evaluating any predicate so that a
    /// configuration built by other means never reaches a content builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        let problems = name_problems(&self.name);
        if problems.is_empty() {
            Ok(())
        } else {
            Err(DomainError::ConfigValidation { problems })
        }
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} + {})", self.name, self.platform, self.state)?;
        let enabled = self.features.enabled();
        if !enabled.is_empty() {
            let names: Vec<&str> = enabled.iter().map(Feature::as_str).collect();
            write!(f, " [{}]", names.join(", "))?;
        }
        Ok(())
    }
}

fn name_problems(name: &str) -> Vec<String> {
    let mut problems = Vec::new();
    match name.chars().next() {
        None => problems.push("project name cannot be empty".to_string()),
        Some(first) if !first.is_ascii_alphabetic() => {
            problems.push(format!("project name '{name}' must start with a letter"))
        }
        Some(_) => {}
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        problems.push(format!(
            "project name '{name}' contains invalid character '{bad}'"
        ));
    }
    problems
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: platform has not yet been set.
pub struct NoPlatform;
/// Marker: platform has been set; the config may now be built.
pub struct HasPlatform;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ProjectConfig`].
///
/// Toggles and the analytics provider are recorded independently, exactly
/// as raw input arrives, and reconciled in `build()`.
pub struct ProjectConfigBuilder<P> {
    name: Option<String>,
    platform: Option<Platform>,
    state: Option<StateManagement>,
    toggles: [bool; Feature::ALL.len()],
    providers: Vec<AnalyticsProvider>,
    _marker: PhantomData<P>,
}

impl ProjectConfigBuilder<NoPlatform> {
    pub fn new() -> Self {
        Self {
            name: None,
            platform: None,
            state: None,
            toggles: [false; Feature::ALL.len()],
            providers: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Set the platform. This transitions the builder to `HasPlatform`.
    pub fn platform(self, platform: Platform) -> ProjectConfigBuilder<HasPlatform> {
        ProjectConfigBuilder {
            name: self.name,
            platform: Some(platform),
            state: self.state,
            toggles: self.toggles,
            providers: self.providers,
            _marker: PhantomData,
        }
    }
}

impl Default for ProjectConfigBuilder<NoPlatform> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ProjectConfigBuilder<P> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the state management library. Defaults to Redux Toolkit.
    pub fn state(mut self, state: StateManagement) -> Self {
        self.state = Some(state);
        self
    }

    /// Switch a feature on or off.
    pub fn feature(mut self, feature: Feature, enabled: bool) -> Self {
        self.toggles[toggle_index(feature)] = enabled;
        self
    }

    /// Request an analytics provider. May be called repeatedly (raw input
    /// can name several); `build()` rejects more than one distinct provider.
    pub fn analytics_provider(mut self, provider: AnalyticsProvider) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn api(self, on: bool) -> Self {
        self.feature(Feature::Api, on)
    }
    pub fn persistence(self, on: bool) -> Self {
        self.feature(Feature::Persistence, on)
    }
    pub fn analytics(self, on: bool) -> Self {
        self.feature(Feature::Analytics, on)
    }
    pub fn pagination(self, on: bool) -> Self {
        self.feature(Feature::Pagination, on)
    }
    pub fn accessibility(self, on: bool) -> Self {
        self.feature(Feature::Accessibility, on)
    }
    pub fn localization(self, on: bool) -> Self {
        self.feature(Feature::Localization, on)
    }
    pub fn env(self, on: bool) -> Self {
        self.feature(Feature::Env, on)
    }
    pub fn tests(self, on: bool) -> Self {
        self.feature(Feature::Tests, on)
    }

    fn toggle(&self, feature: Feature) -> bool {
        self.toggles[toggle_index(feature)]
    }
}

impl ProjectConfigBuilder<HasPlatform> {
    /// Build and validate the `ProjectConfig`.
    ///
    /// Every problem is collected before returning, so one error lists all
    /// of them.
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let mut problems = Vec::new();

        let name = match &self.name {
            Some(name) => {
                problems.extend(name_problems(name));
                name.clone()
            }
            None => {
                problems.push("project name is required".to_string());
                String::new()
            }
        };

        let mut providers = self.providers.clone();
        providers.sort();
        providers.dedup();

        let analytics = if self.toggle(Feature::Analytics) {
            match providers.as_slice() {
                [] => Some(AnalyticsProvider::DEFAULT),
                [only] => Some(*only),
                many => {
                    let names: Vec<&str> = many.iter().map(AnalyticsProvider::as_str).collect();
                    problems.push(format!(
                        "analytics providers are mutually exclusive, got: {}",
                        names.join(", ")
                    ));
                    None
                }
            }
        } else {
            for provider in &providers {
                problems.push(format!(
                    "analytics provider '{provider}' requires analytics to be enabled"
                ));
            }
            None
        };

        if !problems.is_empty() {
            return Err(DomainError::ConfigValidation { problems });
        }

        Ok(ProjectConfig {
            name,
            platform: self.platform.expect("typestate guarantees platform is set"),
            state: self.state.unwrap_or(StateManagement::Redux),
            features: FeatureSet {
                api: self.toggle(Feature::Api),
                persistence: self.toggle(Feature::Persistence),
                analytics,
                pagination: self.toggle(Feature::Pagination),
                accessibility: self.toggle(Feature::Accessibility),
                localization: self.toggle(Feature::Localization),
                env: self.toggle(Feature::Env),
                tests: self.toggle(Feature::Tests),
            },
        })
    }
}

fn toggle_index(feature: Feature) -> usize {
    Feature::ALL
        .iter()
        .position(|f| *f == feature)
        .unwrap_or_default()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ProjectConfigBuilder<HasPlatform> {
        ProjectConfig::builder().name("demo").platform(Platform::Mobile)
    }

    #[test]
    fn defaults_to_redux_with_no_features() {
        let cfg = base().build().unwrap();
        assert_eq!(cfg.state(), StateManagement::Redux);
        assert_eq!(*cfg.features(), FeatureSet::default());
        assert_eq!(cfg.key(), BlueprintKey::new(Platform::Mobile, StateManagement::Redux));
    }

    #[test]
    fn package_name_is_lowercase() {
        let cfg = ProjectConfig::builder()
            .name("My_Shop")
            .platform(Platform::Web)
            .build()
            .unwrap();
        assert_eq!(cfg.name(), "My_Shop");
        assert_eq!(cfg.package_name(), "my-shop");
    }

    #[test]
    fn analytics_without_provider_infers_default() {
        let cfg = base().analytics(true).build().unwrap();
        assert_eq!(cfg.features().analytics, Some(AnalyticsProvider::Firebase));
    }

    #[test]
    fn repeated_identical_provider_is_accepted() {
        let cfg = base()
            .analytics(true)
            .analytics_provider(AnalyticsProvider::Mixpanel)
            .analytics_provider(AnalyticsProvider::Mixpanel)
            .build()
            .unwrap();
        assert_eq!(cfg.features().analytics, Some(AnalyticsProvider::Mixpanel));
    }

    #[test]
    fn two_providers_are_rejected() {
        let err = base()
            .analytics(true)
            .analytics_provider(AnalyticsProvider::Firebase)
            .analytics_provider(AnalyticsProvider::Amplitude)
            .build()
            .unwrap_err();
        match err {
            DomainError::ConfigValidation { problems } => {
                assert_eq!(problems.len(), 1);
                assert!(problems[0].contains("mutually exclusive"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn provider_without_toggle_is_rejected() {
        let err = base()
            .analytics_provider(AnalyticsProvider::Amplitude)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("requires analytics"));
    }

    #[test]
    fn all_problems_reported_together() {
        let err = ProjectConfig::builder()
            .name("9lives!")
            .platform(Platform::Web)
            .analytics_provider(AnalyticsProvider::Firebase)
            .build()
            .unwrap_err();
        match err {
            DomainError::ConfigValidation { problems } => assert_eq!(problems.len(), 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_name_is_a_problem() {
        let err = ProjectConfig::builder()
            .platform(Platform::Web)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("name is required"));
    }

    #[test]
    fn feature_toggles_map_to_fields() {
        let cfg = base()
            .api(true)
            .tests(true)
            .feature(Feature::Localization, true)
            .build()
            .unwrap();
        assert_eq!(
            cfg.features().enabled(),
            vec![Feature::Api, Feature::Localization, Feature::Tests]
        );
    }

    #[test]
    fn display_lists_enabled_features() {
        let cfg = base().state(StateManagement::Mobx).env(true).build().unwrap();
        assert_eq!(cfg.to_string(), "demo (mobile + mobx) [env]");
    }
}
