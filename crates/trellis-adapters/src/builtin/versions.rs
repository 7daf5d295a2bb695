//! Canonical npm versions for every package the built-in catalog requests.

use trellis_core::domain::{DependencyKind, DomainError, VersionRow, VersionTable};

use DependencyKind::{Dev, Runtime};

pub const ROWS: &[VersionRow] = &[
    // shared
    ("react", "18.2.0", Runtime),
    ("typescript", "~5.3.3", Dev),
    ("@types/react", "~18.2.79", Dev),
    // mobile baseline
    ("expo", "~51.0.28", Runtime),
    ("react-native", "0.74.5", Runtime),
    ("expo-status-bar", "~1.12.1", Runtime),
    ("react-native-safe-area-context", "4.10.5", Runtime),
    ("@babel/core", "^7.24.0", Dev),
    // web baseline
    ("react-dom", "18.2.0", Runtime),
    ("vite", "^5.4.0", Dev),
    ("@vitejs/plugin-react", "^4.3.1", Dev),
    ("@types/react-dom", "^18.2.25", Dev),
    // state
    ("@reduxjs/toolkit", "^2.2.7", Runtime),
    ("react-redux", "^9.1.2", Runtime),
    ("redux-persist", "^6.0.0", Runtime),
    ("zustand", "^4.5.5", Runtime),
    ("mobx", "^6.13.1", Runtime),
    ("mobx-react-lite", "^4.0.7", Runtime),
    ("mobx-persist-store", "^1.1.5", Runtime),
    // api
    ("axios", "^1.7.4", Runtime),
    // persistence
    ("@react-native-async-storage/async-storage", "1.23.1", Runtime),
    ("localforage", "^1.10.0", Runtime),
    // analytics
    ("@react-native-firebase/app", "^20.4.0", Runtime),
    ("@react-native-firebase/analytics", "^20.4.0", Runtime),
    ("firebase", "^10.13.0", Runtime),
    ("@amplitude/analytics-react-native", "^1.4.9", Runtime),
    ("@amplitude/analytics-browser", "^2.11.1", Runtime),
    ("mixpanel-react-native", "^3.0.5", Runtime),
    ("mixpanel-browser", "^2.55.0", Runtime),
    ("@types/mixpanel-browser", "^2.50.0", Dev),
    // accessibility
    ("@axe-core/react", "^4.10.0", Dev),
    // localization
    ("i18next", "^23.14.0", Runtime),
    ("react-i18next", "^15.0.1", Runtime),
    ("expo-localization", "~15.0.3", Runtime),
    // env
    ("expo-constants", "~16.0.2", Runtime),
    // tests (mobile)
    ("jest", "^29.7.0", Dev),
    ("jest-expo", "~51.0.4", Dev),
    ("@testing-library/react-native", "^12.6.1", Dev),
    ("@types/jest", "^29.5.12", Dev),
    // tests (web)
    ("vitest", "^2.0.5", Dev),
    ("jsdom", "^25.0.0", Dev),
    ("@testing-library/react", "^16.0.0", Dev),
    ("@testing-library/dom", "^10.4.0", Dev),
    ("@testing-library/jest-dom", "^6.5.0", Dev),
];

/// The built-in canonical table.
pub fn canonical() -> Result<VersionTable, DomainError> {
    VersionTable::from_rows(ROWS)
}
