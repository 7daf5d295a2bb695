//! Domain value objects: Platform, StateManagement, AnalyticsProvider, DependencyKind.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO inclusion logic. Which files and packages a value pulls in
//! lives in the blueprint tables; this file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the blueprint sections for it in the built-in catalog
//! 4. Done. The resolver, assembler and validator need no change

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Platform ──────────────────────────────────────────────────────────────────

/// The runtime the generated project targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// React Native on Expo.
    Mobile,
    /// React on Vite.
    Web,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Self::Mobile, Self::Web];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Web => "web",
        }
    }

    /// Human-readable toolchain name, used in listings.
    pub const fn toolchain(&self) -> &'static str {
        match self {
            Self::Mobile => "React Native (Expo)",
            Self::Web => "React (Vite)",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mobile" | "native" | "react-native" | "expo" => Ok(Self::Mobile),
            "web" | "react" | "vite" => Ok(Self::Web),
            other => Err(DomainError::invalid_config(format!(
                "unknown platform: {other}"
            ))),
        }
    }
}

// ── StateManagement ───────────────────────────────────────────────────────────

/// The state management library wired into the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    /// Redux Toolkit with `react-redux` bindings.
    Redux,
    /// Zustand hooks.
    Zustand,
    /// MobX observables with `mobx-react-lite`.
    Mobx,
}

impl StateManagement {
    pub const ALL: [StateManagement; 3] = [Self::Redux, Self::Zustand, Self::Mobx];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Redux => "redux",
            Self::Zustand => "zustand",
            Self::Mobx => "mobx",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Redux => "Redux Toolkit",
            Self::Zustand => "Zustand",
            Self::Mobx => "MobX",
        }
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateManagement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redux" | "rtk" | "redux-toolkit" => Ok(Self::Redux),
            "zustand" => Ok(Self::Zustand),
            "mobx" => Ok(Self::Mobx),
            other => Err(DomainError::invalid_config(format!(
                "unknown state management library: {other}"
            ))),
        }
    }
}

// ── AnalyticsProvider ─────────────────────────────────────────────────────────

/// Analytics backend. Only meaningful when analytics is enabled; the
/// providers are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsProvider {
    Firebase,
    Amplitude,
    Mixpanel,
}

impl AnalyticsProvider {
    pub const ALL: [AnalyticsProvider; 3] = [Self::Firebase, Self::Amplitude, Self::Mixpanel];

    /// Provider chosen when analytics is enabled without naming one.
    pub const DEFAULT: AnalyticsProvider = Self::Firebase;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Firebase => "firebase",
            Self::Amplitude => "amplitude",
            Self::Mixpanel => "mixpanel",
        }
    }
}

impl fmt::Display for AnalyticsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsProvider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "firebase" | "google" => Ok(Self::Firebase),
            "amplitude" => Ok(Self::Amplitude),
            "mixpanel" => Ok(Self::Mixpanel),
            other => Err(DomainError::invalid_config(format!(
                "unknown analytics provider: {other}"
            ))),
        }
    }
}

// ── DependencyKind ────────────────────────────────────────────────────────────

/// Which `package.json` section a package belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    /// Key of the `package.json` object this kind is written under.
    pub const fn section(&self) -> &'static str {
        match self {
            Self::Runtime => "dependencies",
            Self::Dev => "devDependencies",
        }
    }
}
