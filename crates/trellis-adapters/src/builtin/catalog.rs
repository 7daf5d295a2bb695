//! The built-in file specification tables.
//!
//! Each blueprint is stacked from sections in a fixed order: platform
//! baseline, shared files, state library, features, then the persistence
//! glue of the state library. Paths are unique across every section that
//! can appear together, so the resolver never has to arbitrate.

use trellis_core::domain::{
    Blueprint, BlueprintKey, DependencyGroup, DomainError, FileSpec, PackageRequest, Platform,
    Section, StateManagement,
    predicates::{
        ACCESSIBILITY, ALWAYS, ANALYTICS, ANALYTICS_AMPLITUDE, ANALYTICS_FIREBASE,
        ANALYTICS_MIXPANEL, API, ENV, LOCALIZATION, PAGINATION, PERSISTENCE, TESTS,
    },
};

use super::content::{common, features, mobile, state, web};

// ── Platform baselines ────────────────────────────────────────────────────────

static MOBILE_BASELINE: Section = Section {
    name: "mobile-baseline",
    files: &[
        FileSpec::new("app.json", &ALWAYS, mobile::app_json),
        FileSpec::new("babel.config.js", &ALWAYS, mobile::babel_config),
        FileSpec::new("tsconfig.json", &ALWAYS, mobile::tsconfig),
        FileSpec::new("App.tsx", &ALWAYS, mobile::app),
        FileSpec::new("src/screens/HomeScreen.tsx", &ALWAYS, mobile::home_screen),
    ],
    groups: &[DependencyGroup {
        trigger: &ALWAYS,
        packages: &[
            PackageRequest::new("expo"),
            PackageRequest::pinned("react", "18.2.0"),
            PackageRequest::pinned("react-native", "0.74.5"),
            PackageRequest::new("expo-status-bar"),
            PackageRequest::new("react-native-safe-area-context"),
            PackageRequest::new("typescript"),
            PackageRequest::new("@types/react"),
            PackageRequest::new("@babel/core"),
        ],
    }],
};

static WEB_BASELINE: Section = Section {
    name: "web-baseline",
    files: &[
        FileSpec::new("index.html", &ALWAYS, web::index_html),
        FileSpec::new("vite.config.ts", &ALWAYS, web::vite_config),
        FileSpec::new("tsconfig.json", &ALWAYS, web::tsconfig),
        FileSpec::new("src/vite-env.d.ts", &ALWAYS, web::vite_env),
        FileSpec::new("src/main.tsx", &ALWAYS, web::main),
        FileSpec::new("src/App.tsx", &ALWAYS, web::app),
        FileSpec::new("src/components/Counter.tsx", &ALWAYS, web::counter),
        FileSpec::new("src/index.css", &ALWAYS, web::index_css),
    ],
    groups: &[DependencyGroup {
        trigger: &ALWAYS,
        packages: &[
            PackageRequest::pinned("react", "18.2.0"),
            PackageRequest::pinned("react-dom", "18.2.0"),
            PackageRequest::new("vite"),
            PackageRequest::new("@vitejs/plugin-react"),
            PackageRequest::new("typescript"),
            PackageRequest::new("@types/react"),
            PackageRequest::new("@types/react-dom"),
        ],
    }],
};

static COMMON: Section = Section {
    name: "common",
    files: &[
        FileSpec::new(".gitignore", &ALWAYS, common::gitignore),
        FileSpec::new("README.md", &ALWAYS, common::readme),
    ],
    groups: &[],
};

// ── State libraries ───────────────────────────────────────────────────────────

static REDUX: Section = Section {
    name: "redux",
    files: &[
        FileSpec::new("src/store/counterSlice.ts", &ALWAYS, state::redux_slice),
        FileSpec::new("src/store/store.ts", &ALWAYS, state::redux_store),
        FileSpec::new("src/store/hooks.ts", &ALWAYS, state::redux_hooks),
    ],
    groups: &[DependencyGroup {
        trigger: &ALWAYS,
        packages: &[
            PackageRequest::new("@reduxjs/toolkit"),
            PackageRequest::new("react-redux"),
        ],
    }],
};

static ZUSTAND: Section = Section {
    name: "zustand",
    files: &[FileSpec::new("src/store/useCounterStore.ts", &ALWAYS, state::zustand_store)],
    groups: &[DependencyGroup {
        trigger: &ALWAYS,
        packages: &[PackageRequest::new("zustand")],
    }],
};

static MOBX: Section = Section {
    name: "mobx",
    files: &[
        FileSpec::new("src/store/CounterStore.ts", &ALWAYS, state::mobx_store),
        FileSpec::new("src/store/StoreContext.tsx", &ALWAYS, state::mobx_context),
    ],
    groups: &[DependencyGroup {
        trigger: &ALWAYS,
        packages: &[PackageRequest::new("mobx"), PackageRequest::new("mobx-react-lite")],
    }],
};

// ── Persistence glue ──────────────────────────────────────────────────────────

static REDUX_PERSISTENCE: Section = Section {
    name: "redux-persistence",
    files: &[FileSpec::new("src/store/persistedStore.ts", &PERSISTENCE, state::redux_persist)],
    groups: &[DependencyGroup {
        trigger: &PERSISTENCE,
        packages: &[PackageRequest::new("redux-persist")],
    }],
};

// `zustand/middleware` ships with zustand itself.
static ZUSTAND_PERSISTENCE: Section = Section {
    name: "zustand-persistence",
    files: &[FileSpec::new(
        "src/store/usePersistedCounterStore.ts",
        &PERSISTENCE,
        state::zustand_persist,
    )],
    groups: &[],
};

static MOBX_PERSISTENCE: Section = Section {
    name: "mobx-persistence",
    files: &[FileSpec::new("src/store/persistCounterStore.ts", &PERSISTENCE, state::mobx_persist)],
    groups: &[DependencyGroup {
        trigger: &PERSISTENCE,
        packages: &[PackageRequest::new("mobx-persist-store")],
    }],
};

// ── Features ──────────────────────────────────────────────────────────────────

static SHARED_FEATURES: Section = Section {
    name: "shared-features",
    files: &[
        FileSpec::new("src/api/client.ts", &API, features::api_client),
        FileSpec::new("src/api/endpoints.ts", &API, features::api_endpoints),
        FileSpec::new("src/analytics/types.ts", &ANALYTICS, features::analytics_types),
        FileSpec::new("src/analytics/analytics.ts", &ANALYTICS, features::analytics_facade),
        FileSpec::new("src/hooks/usePagination.ts", &PAGINATION, features::use_pagination),
        FileSpec::new("locales/en.json", &LOCALIZATION, features::locale_en),
        FileSpec::new("locales/es.json", &LOCALIZATION, features::locale_es),
    ],
    groups: &[DependencyGroup {
        trigger: &API,
        packages: &[PackageRequest::pinned("axios", "^1.7.4")],
    }],
};

static MOBILE_FEATURES: Section = Section {
    name: "mobile-features",
    files: &[
        FileSpec::new("src/storage/storage.ts", &PERSISTENCE, features::storage_mobile),
        FileSpec::new(
            "src/analytics/providers/firebase.ts",
            &ANALYTICS_FIREBASE,
            features::firebase_mobile,
        ),
        FileSpec::new(
            "src/analytics/providers/amplitude.ts",
            &ANALYTICS_AMPLITUDE,
            features::amplitude_mobile,
        ),
        FileSpec::new(
            "src/analytics/providers/mixpanel.ts",
            &ANALYTICS_MIXPANEL,
            features::mixpanel_mobile,
        ),
        FileSpec::new("src/a11y/useScreenReader.ts", &ACCESSIBILITY, features::screen_reader),
        FileSpec::new("src/i18n/index.ts", &LOCALIZATION, features::i18n_mobile),
        FileSpec::new("src/config/env.ts", &ENV, features::env_mobile),
        FileSpec::new(".env.example", &ENV, features::env_example_mobile),
        FileSpec::new("jest.config.js", &TESTS, features::jest_config),
        FileSpec::new("__tests__/App.test.tsx", &TESTS, features::app_test_mobile),
    ],
    groups: &[
        DependencyGroup {
            trigger: &PERSISTENCE,
            packages: &[PackageRequest::new("@react-native-async-storage/async-storage")],
        },
        DependencyGroup {
            trigger: &ANALYTICS_FIREBASE,
            packages: &[
                PackageRequest::new("@react-native-firebase/app"),
                PackageRequest::new("@react-native-firebase/analytics"),
            ],
        },
        DependencyGroup {
            trigger: &ANALYTICS_AMPLITUDE,
            packages: &[PackageRequest::new("@amplitude/analytics-react-native")],
        },
        DependencyGroup {
            trigger: &ANALYTICS_MIXPANEL,
            packages: &[PackageRequest::new("mixpanel-react-native")],
        },
        DependencyGroup {
            trigger: &LOCALIZATION,
            packages: &[
                PackageRequest::new("i18next"),
                PackageRequest::new("react-i18next"),
                PackageRequest::new("expo-localization"),
            ],
        },
        DependencyGroup {
            trigger: &ENV,
            packages: &[PackageRequest::new("expo-constants")],
        },
        DependencyGroup {
            trigger: &TESTS,
            packages: &[
                PackageRequest::new("jest"),
                PackageRequest::new("jest-expo"),
                PackageRequest::new("@testing-library/react-native"),
                PackageRequest::new("@types/jest"),
            ],
        },
    ],
};

static WEB_FEATURES: Section = Section {
    name: "web-features",
    files: &[
        FileSpec::new("src/storage/storage.ts", &PERSISTENCE, features::storage_web),
        FileSpec::new(
            "src/analytics/providers/firebase.ts",
            &ANALYTICS_FIREBASE,
            features::firebase_web,
        ),
        FileSpec::new(
            "src/analytics/providers/amplitude.ts",
            &ANALYTICS_AMPLITUDE,
            features::amplitude_web,
        ),
        FileSpec::new(
            "src/analytics/providers/mixpanel.ts",
            &ANALYTICS_MIXPANEL,
            features::mixpanel_web,
        ),
        FileSpec::new("src/a11y/axe.ts", &ACCESSIBILITY, features::axe),
        FileSpec::new("src/i18n/index.ts", &LOCALIZATION, features::i18n_web),
        FileSpec::new("src/config/env.ts", &ENV, features::env_web),
        FileSpec::new("src/config/env.d.ts", &ENV, features::env_web_types),
        FileSpec::new(".env.example", &ENV, features::env_example_web),
        FileSpec::new("vitest.config.ts", &TESTS, features::vitest_config),
        FileSpec::new("src/test/setup.ts", &TESTS, features::test_setup_web),
        FileSpec::new("src/App.test.tsx", &TESTS, features::app_test_web),
    ],
    groups: &[
        DependencyGroup {
            trigger: &PERSISTENCE,
            packages: &[PackageRequest::new("localforage")],
        },
        DependencyGroup {
            trigger: &ANALYTICS_FIREBASE,
            packages: &[PackageRequest::new("firebase")],
        },
        DependencyGroup {
            trigger: &ANALYTICS_AMPLITUDE,
            packages: &[PackageRequest::new("@amplitude/analytics-browser")],
        },
        DependencyGroup {
            trigger: &ANALYTICS_MIXPANEL,
            packages: &[
                PackageRequest::new("mixpanel-browser"),
                PackageRequest::new("@types/mixpanel-browser"),
            ],
        },
        DependencyGroup {
            trigger: &ACCESSIBILITY,
            packages: &[PackageRequest::new("@axe-core/react")],
        },
        DependencyGroup {
            trigger: &LOCALIZATION,
            packages: &[PackageRequest::new("i18next"), PackageRequest::new("react-i18next")],
        },
        DependencyGroup {
            trigger: &TESTS,
            packages: &[
                PackageRequest::new("vitest"),
                PackageRequest::new("jsdom"),
                PackageRequest::new("@testing-library/react"),
                PackageRequest::new("@testing-library/dom"),
                PackageRequest::new("@testing-library/jest-dom"),
            ],
        },
    ],
};

// ── Composition ───────────────────────────────────────────────────────────────

/// Compose the blueprint for one (platform, state) combination.
pub fn blueprint(key: BlueprintKey) -> Result<Blueprint, DomainError> {
    let (baseline, platform_features) = match key.platform {
        Platform::Mobile => (&MOBILE_BASELINE, &MOBILE_FEATURES),
        Platform::Web => (&WEB_BASELINE, &WEB_FEATURES),
    };
    let (library, glue) = match key.state {
        StateManagement::Redux => (&REDUX, &REDUX_PERSISTENCE),
        StateManagement::Zustand => (&ZUSTAND, &ZUSTAND_PERSISTENCE),
        StateManagement::Mobx => (&MOBX, &MOBX_PERSISTENCE),
    };

    Blueprint::builder(key)
        .section(baseline)
        .section(&COMMON)
        .section(library)
        .section(&SHARED_FEATURES)
        .section(platform_features)
        .section(glue)
        .build()
}

/// Every built-in blueprint, platform-major.
pub fn all() -> Result<Vec<Blueprint>, DomainError> {
    BlueprintKey::all().map(blueprint).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn six_blueprints_build() {
        let all = all().unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].key(), BlueprintKey::new(Platform::Mobile, StateManagement::Redux));
        assert_eq!(all[5].description(), "React (Vite) with MobX");
    }

    #[test]
    fn declared_paths_never_collide() {
        for bp in all().unwrap() {
            let mut seen = HashSet::new();
            for entry in bp.entries() {
                assert!(seen.insert(entry.spec.path), "{}: {}", bp.key(), entry.spec.path);
            }
        }
    }

    #[test]
    fn sections_stack_in_order() {
        let bp = blueprint(BlueprintKey::new(Platform::Web, StateManagement::Zustand)).unwrap();
        assert_eq!(
            bp.sections(),
            [
                "web-baseline",
                "common",
                "zustand",
                "shared-features",
                "web-features",
                "zustand-persistence"
            ]
        );
    }

    #[test]
    fn entries_and_groups_share_predicates() {
        let bp = blueprint(BlueprintKey::new(Platform::Mobile, StateManagement::Mobx)).unwrap();
        let glue = bp
            .groups()
            .iter()
            .find(|g| g.section == "mobx-persistence")
            .unwrap();
        let file = bp
            .entries()
            .iter()
            .find(|e| e.spec.path == "src/store/persistCounterStore.ts")
            .unwrap();
        assert!(glue.group.trigger.is(file.spec.include));
    }
}
