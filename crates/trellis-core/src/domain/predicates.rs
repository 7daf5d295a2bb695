//! Inclusion predicates.
//!
//! Every rule deciding whether a file is emitted or a dependency group is
//! pulled in is one of the `static` items below. Blueprint tables hold
//! `&'static Predicate` references, so a file entry and the dependency group
//! that backs it point at the *same* item. A predicate edited in one place
//! can therefore never drift from its twin in the other table.

use std::fmt;

use crate::domain::{config::ProjectConfig, value_objects::AnalyticsProvider};

/// A named, total inclusion rule over a validated configuration.
pub struct Predicate {
    pub name: &'static str,
    pub eval: fn(&ProjectConfig) -> bool,
}

impl Predicate {
    pub fn holds(&self, config: &ProjectConfig) -> bool {
        (self.eval)(config)
    }

    /// Identity comparison. Two predicates are the same rule only when they
    /// are the same static item.
    pub fn is(&self, other: &Predicate) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

pub static ALWAYS: Predicate = Predicate {
    name: "baseline",
    eval: |_| true,
};

pub static API: Predicate = Predicate {
    name: "api",
    eval: |c| c.features().api,
};

pub static PERSISTENCE: Predicate = Predicate {
    name: "persistence",
    eval: |c| c.features().persistence,
};

pub static ANALYTICS: Predicate = Predicate {
    name: "analytics",
    eval: |c| c.features().analytics.is_some(),
};

pub static ANALYTICS_FIREBASE: Predicate = Predicate {
    name: "analytics:firebase",
    eval: |c| c.features().analytics == Some(AnalyticsProvider::Firebase),
};

pub static ANALYTICS_AMPLITUDE: Predicate = Predicate {
    name: "analytics:amplitude",
    eval: |c| c.features().analytics == Some(AnalyticsProvider::Amplitude),
};

pub static ANALYTICS_MIXPANEL: Predicate = Predicate {
    name: "analytics:mixpanel",
    eval: |c| c.features().analytics == Some(AnalyticsProvider::Mixpanel),
};

pub static PAGINATION: Predicate = Predicate {
    name: "pagination",
    eval: |c| c.features().pagination,
};

pub static ACCESSIBILITY: Predicate = Predicate {
    name: "accessibility",
    eval: |c| c.features().accessibility,
};

pub static LOCALIZATION: Predicate = Predicate {
    name: "localization",
    eval: |c| c.features().localization,
};

pub static ENV: Predicate = Predicate {
    name: "env",
    eval: |c| c.features().env,
};

pub static TESTS: Predicate = Predicate {
    name: "tests",
    eval: |c| c.features().tests,
};

/// The predicate selecting one analytics provider.
pub fn analytics_provider(provider: AnalyticsProvider) -> &'static Predicate {
    match provider {
        AnalyticsProvider::Firebase => &ANALYTICS_FIREBASE,
        AnalyticsProvider::Amplitude => &ANALYTICS_AMPLITUDE,
        AnalyticsProvider::Mixpanel => &ANALYTICS_MIXPANEL,
    }
}

/// A set of predicates of which at most one may hold for any configuration.
pub struct ExclusiveSet {
    pub label: &'static str,
    pub members: &'static [&'static Predicate],
}

impl ExclusiveSet {
    pub fn contains_name(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }
}

pub static EXCLUSIVE_FEATURES: &[ExclusiveSet] = &[ExclusiveSet {
    label: "analytics provider",
    members: &[&ANALYTICS_FIREBASE, &ANALYTICS_AMPLITUDE, &ANALYTICS_MIXPANEL],
}];

/// Every named predicate, in declaration order.
pub static ALL: &[&Predicate] = &[
    &ALWAYS,
    &API,
    &PERSISTENCE,
    &ANALYTICS,
    &ANALYTICS_FIREBASE,
    &ANALYTICS_AMPLITUDE,
    &ANALYTICS_MIXPANEL,
    &PAGINATION,
    &ACCESSIBILITY,
    &LOCALIZATION,
    &ENV,
    &TESTS,
];
