//! Optional feature modules.
//!
//! Each feature owns its files outright. Nothing in the baseline imports a
//! feature module, and a feature module imports only baseline files, its
//! own files and its own packages. That keeps any toggle from touching a
//! file it does not own.

use trellis_core::domain::{AnalyticsProvider, ProjectConfig};

use super::render;

// ── API ───────────────────────────────────────────────────────────────────────

const API_CLIENT: &str = r#"import axios, { type AxiosInstance } from 'axios';

export const client: AxiosInstance = axios.create({
  baseURL: 'http://localhost:3000',
  timeout: 10_000,
  headers: { 'Content-Type': 'application/json' },
});

export function configureClient(baseURL: string, token?: string): void {
  client.defaults.baseURL = baseURL;
  if (token) {
    client.defaults.headers.common.Authorization = `Bearer ${token}`;
  } else {
    delete client.defaults.headers.common.Authorization;
  }
}
"#;

const API_ENDPOINTS: &str = r#"import { client } from './client';

export interface Item {
  id: string;
  title: string;
}

export interface Page<T> {
  items: T[];
  nextCursor: string | null;
}

export async function fetchItems(cursor?: string): Promise<Page<Item>> {
  const response = await client.get<Page<Item>>('/items', { params: { cursor } });
  return response.data;
}

export async function fetchItem(id: string): Promise<Item> {
  const response = await client.get<Item>(`/items/${id}`);
  return response.data;
}
"#;

pub fn api_client(_: &ProjectConfig) -> String {
    API_CLIENT.to_string()
}

pub fn api_endpoints(_: &ProjectConfig) -> String {
    API_ENDPOINTS.to_string()
}

// ── Persistence ───────────────────────────────────────────────────────────────

const STORAGE_MOBILE: &str = r#"import AsyncStorage from '@react-native-async-storage/async-storage';

export interface KeyValueStorage {
  getItem(key: string): Promise<string | null>;
  setItem(key: string, value: string): Promise<void>;
  removeItem(key: string): Promise<void>;
}

export const storage: KeyValueStorage = {
  getItem: (key) => AsyncStorage.getItem(key),
  setItem: (key, value) => AsyncStorage.setItem(key, value),
  removeItem: (key) => AsyncStorage.removeItem(key),
};
"#;

const STORAGE_WEB: &str = r#"import localforage from 'localforage';

export interface KeyValueStorage {
  getItem(key: string): Promise<string | null>;
  setItem(key: string, value: string): Promise<void>;
  removeItem(key: string): Promise<void>;
}

const store = localforage.createInstance({ name: '{{PROJECT_SLUG}}' });

export const storage: KeyValueStorage = {
  getItem: (key) => store.getItem<string>(key),
  setItem: async (key, value) => {
    await store.setItem(key, value);
  },
  removeItem: (key) => store.removeItem(key),
};
"#;

pub fn storage_mobile(_: &ProjectConfig) -> String {
    STORAGE_MOBILE.to_string()
}

pub fn storage_web(config: &ProjectConfig) -> String {
    render(STORAGE_WEB, config)
}

// ── Analytics ─────────────────────────────────────────────────────────────────

const ANALYTICS_TYPES: &str = r#"export type EventProperties = Record<string, string | number | boolean>;

export interface AnalyticsClient {
  identify(userId: string): Promise<void>;
  track(event: string, properties?: EventProperties): Promise<void>;
  screen(name: string): Promise<void>;
  reset(): Promise<void>;
}
"#;

const ANALYTICS_FACADE: &str = r#"import type { AnalyticsClient, EventProperties } from './types';
import { createClient } from './providers/{{PROVIDER}}';

let active: AnalyticsClient | null = null;

export function initAnalytics(apiKey: string): AnalyticsClient {
  active = createClient(apiKey);
  return active;
}

function client(): AnalyticsClient {
  if (!active) {
    throw new Error('initAnalytics() has not been called');
  }
  return active;
}

export const analytics = {
  identify: (userId: string) => client().identify(userId),
  track: (event: string, properties?: EventProperties) => client().track(event, properties),
  screen: (name: string) => client().screen(name),
  reset: () => client().reset(),
};
"#;

pub fn analytics_types(_: &ProjectConfig) -> String {
    ANALYTICS_TYPES.to_string()
}

pub fn analytics_facade(config: &ProjectConfig) -> String {
    let provider = config
        .features()
        .analytics
        .unwrap_or(AnalyticsProvider::DEFAULT);
    ANALYTICS_FACADE.replace("{{PROVIDER}}", provider.as_str())
}

const FIREBASE_MOBILE: &str = r#"import analytics from '@react-native-firebase/analytics';
import type { AnalyticsClient } from '../types';

// Native Firebase reads its keys from google-services files, so the key is unused.
export function createClient(_apiKey: string): AnalyticsClient {
  const instance = analytics();
  return {
    identify: (userId) => instance.setUserId(userId),
    track: (event, properties) => instance.logEvent(event, properties),
    screen: (name) => instance.logScreenView({ screen_name: name, screen_class: name }),
    reset: () => instance.resetAnalyticsData(),
  };
}
"#;

const FIREBASE_WEB: &str = r#"import { initializeApp } from 'firebase/app';
import { getAnalytics, logEvent, setUserId } from 'firebase/analytics';
import type { AnalyticsClient } from '../types';

export function createClient(apiKey: string): AnalyticsClient {
  const app = initializeApp({ apiKey, appId: '{{PROJECT_SLUG}}' });
  const instance = getAnalytics(app);
  return {
    identify: async (userId) => setUserId(instance, userId),
    track: async (event, properties) => logEvent(instance, event, properties),
    screen: async (name) => logEvent(instance, 'screen_view', { firebase_screen: name }),
    reset: async () => setUserId(instance, null),
  };
}
"#;

const AMPLITUDE_MOBILE: &str = r#"import * as amplitude from '@amplitude/analytics-react-native';
import type { AnalyticsClient } from '../types';

export function createClient(apiKey: string): AnalyticsClient {
  amplitude.init(apiKey);
  return {
    identify: async (userId) => amplitude.setUserId(userId),
    track: async (event, properties) => {
      await amplitude.track(event, properties).promise;
    },
    screen: async (name) => {
      await amplitude.track('Screen Viewed', { name }).promise;
    },
    reset: async () => amplitude.reset(),
  };
}
"#;

const AMPLITUDE_WEB: &str = r#"import * as amplitude from '@amplitude/analytics-browser';
import type { AnalyticsClient } from '../types';

export function createClient(apiKey: string): AnalyticsClient {
  amplitude.init(apiKey, { autocapture: false });
  return {
    identify: async (userId) => amplitude.setUserId(userId),
    track: async (event, properties) => {
      await amplitude.track(event, properties).promise;
    },
    screen: async (name) => {
      await amplitude.track('Page Viewed', { name }).promise;
    },
    reset: async () => amplitude.reset(),
  };
}
"#;

const MIXPANEL_MOBILE: &str = r#"import { Mixpanel } from 'mixpanel-react-native';
import type { AnalyticsClient } from '../types';

export function createClient(apiKey: string): AnalyticsClient {
  const instance = new Mixpanel(apiKey, true);
  void instance.init();
  return {
    identify: (userId) => instance.identify(userId),
    track: async (event, properties) => instance.track(event, properties),
    screen: async (name) => instance.track('Screen Viewed', { name }),
    reset: async () => instance.reset(),
  };
}
"#;

const MIXPANEL_WEB: &str = r#"import mixpanel from 'mixpanel-browser';
import type { AnalyticsClient } from '../types';

export function createClient(apiKey: string): AnalyticsClient {
  mixpanel.init(apiKey, { track_pageview: false, persistence: 'localStorage' });
  return {
    identify: async (userId) => {
      mixpanel.identify(userId);
    },
    track: async (event, properties) => {
      mixpanel.track(event, properties);
    },
    screen: async (name) => {
      mixpanel.track_pageview({ page: name });
    },
    reset: async () => mixpanel.reset(),
  };
}
"#;

pub fn firebase_mobile(_: &ProjectConfig) -> String {
    FIREBASE_MOBILE.to_string()
}

pub fn firebase_web(config: &ProjectConfig) -> String {
    render(FIREBASE_WEB, config)
}

pub fn amplitude_mobile(_: &ProjectConfig) -> String {
    AMPLITUDE_MOBILE.to_string()
}

pub fn amplitude_web(_: &ProjectConfig) -> String {
    AMPLITUDE_WEB.to_string()
}

pub fn mixpanel_mobile(_: &ProjectConfig) -> String {
    MIXPANEL_MOBILE.to_string()
}

pub fn mixpanel_web(_: &ProjectConfig) -> String {
    MIXPANEL_WEB.to_string()
}

// ── Pagination ────────────────────────────────────────────────────────────────

const USE_PAGINATION: &str = r#"import { useCallback, useRef, useState } from 'react';

export interface PageResult<T> {
  items: T[];
  nextCursor: string | null;
}

export type PageLoader<T> = (cursor: string | null) => Promise<PageResult<T>>;

export function usePagination<T>(load: PageLoader<T>) {
  const [items, setItems] = useState<T[]>([]);
  const [loading, setLoading] = useState(false);
  const [error, setError] = useState<Error | null>(null);
  const cursor = useRef<string | null>(null);
  const [hasMore, setHasMore] = useState(true);

  const loadMore = useCallback(async () => {
    if (loading || !hasMore) {
      return;
    }
    setLoading(true);
    setError(null);
    try {
      const page = await load(cursor.current);
      cursor.current = page.nextCursor;
      setItems((prev) => [...prev, ...page.items]);
      setHasMore(page.nextCursor !== null);
    } catch (err) {
      setError(err instanceof Error ? err : new Error(String(err)));
    } finally {
      setLoading(false);
    }
  }, [load, loading, hasMore]);

  const refresh = useCallback(() => {
    cursor.current = null;
    setItems([]);
    setHasMore(true);
  }, []);

  return { items, loading, error, hasMore, loadMore, refresh };
}
"#;

pub fn use_pagination(_: &ProjectConfig) -> String {
    USE_PAGINATION.to_string()
}

// ── Accessibility ─────────────────────────────────────────────────────────────

const SCREEN_READER: &str = r#"import { useEffect, useState } from 'react';
import { AccessibilityInfo } from 'react-native';

export function useScreenReader(): boolean {
  const [enabled, setEnabled] = useState(false);

  useEffect(() => {
    let mounted = true;
    AccessibilityInfo.isScreenReaderEnabled().then((value) => {
      if (mounted) {
        setEnabled(value);
      }
    });
    const subscription = AccessibilityInfo.addEventListener('screenReaderChanged', setEnabled);
    return () => {
      mounted = false;
      subscription.remove();
    };
  }, []);

  return enabled;
}

export function announce(message: string): void {
  AccessibilityInfo.announceForAccessibility(message);
}
"#;

const AXE: &str = r#"// Reports accessibility violations to the console in development builds.
export async function enableAxe(): Promise<void> {
  if (!import.meta.env.DEV) {
    return;
  }
  const [React, ReactDOM, axe] = await Promise.all([
    import('react'),
    import('react-dom'),
    import('@axe-core/react'),
  ]);
  await axe.default(React, ReactDOM, 1000);
}
"#;

pub fn screen_reader(_: &ProjectConfig) -> String {
    SCREEN_READER.to_string()
}

pub fn axe(_: &ProjectConfig) -> String {
    AXE.to_string()
}

// ── Localization ──────────────────────────────────────────────────────────────

const I18N_MOBILE: &str = r#"import i18n from 'i18next';
import { initReactI18next } from 'react-i18next';
import { getLocales } from 'expo-localization';
import en from '../../locales/en.json';
import es from '../../locales/es.json';

const deviceLanguage = getLocales()[0]?.languageCode ?? 'en';

void i18n.use(initReactI18next).init({
  resources: {
    en: { translation: en },
    es: { translation: es },
  },
  lng: deviceLanguage,
  fallbackLng: 'en',
  interpolation: { escapeValue: false },
});

export default i18n;
"#;

const I18N_WEB: &str = r#"import i18n from 'i18next';
import { initReactI18next } from 'react-i18next';
import en from '../../locales/en.json';
import es from '../../locales/es.json';

const browserLanguage = navigator.language.split('-')[0] ?? 'en';

void i18n.use(initReactI18next).init({
  resources: {
    en: { translation: en },
    es: { translation: es },
  },
  lng: browserLanguage,
  fallbackLng: 'en',
  interpolation: { escapeValue: false },
});

export default i18n;
"#;

const LOCALE_EN: &str = r#"{
  "title": "{{PROJECT_TITLE}}",
  "counter": {
    "increment": "Increment",
    "decrement": "Decrement"
  },
  "errors": {
    "generic": "Something went wrong"
  }
}
"#;

const LOCALE_ES: &str = r#"{
  "title": "{{PROJECT_TITLE}}",
  "counter": {
    "increment": "Incrementar",
    "decrement": "Disminuir"
  },
  "errors": {
    "generic": "Algo salió mal"
  }
}
"#;

pub fn i18n_mobile(_: &ProjectConfig) -> String {
    I18N_MOBILE.to_string()
}

pub fn i18n_web(_: &ProjectConfig) -> String {
    I18N_WEB.to_string()
}

pub fn locale_en(config: &ProjectConfig) -> String {
    render(LOCALE_EN, config)
}

pub fn locale_es(config: &ProjectConfig) -> String {
    render(LOCALE_ES, config)
}

// ── Environment ───────────────────────────────────────────────────────────────

const ENV_MOBILE: &str = r#"import Constants from 'expo-constants';

const extra = (Constants.expoConfig?.extra ?? {}) as Record<string, string | undefined>;

export const env = {
  apiUrl: process.env.EXPO_PUBLIC_API_URL ?? extra.apiUrl ?? 'http://localhost:3000',
  appName: process.env.EXPO_PUBLIC_APP_NAME ?? '{{PROJECT_TITLE}}',
} as const;
"#;

const ENV_WEB: &str = r#"export const env = {
  apiUrl: import.meta.env.VITE_API_URL ?? 'http://localhost:3000',
  appName: import.meta.env.VITE_APP_NAME ?? '{{PROJECT_TITLE}}',
} as const;
"#;

const ENV_WEB_TYPES: &str = r#"interface ImportMetaEnv {
  readonly VITE_API_URL?: string;
  readonly VITE_APP_NAME?: string;
}

interface ImportMeta {
  readonly env: ImportMetaEnv;
}
"#;

const ENV_EXAMPLE_MOBILE: &str = concat!(
    "EXPO_PUBLIC_API_URL=http://localhost:3000\n",
    "EXPO_PUBLIC_APP_NAME={{PROJECT_TITLE}}\n",
);

const ENV_EXAMPLE_WEB: &str = concat!(
    "VITE_API_URL=http://localhost:3000\n",
    "VITE_APP_NAME={{PROJECT_TITLE}}\n",
);

pub fn env_mobile(config: &ProjectConfig) -> String {
    render(ENV_MOBILE, config)
}

pub fn env_web(config: &ProjectConfig) -> String {
    render(ENV_WEB, config)
}

pub fn env_web_types(_: &ProjectConfig) -> String {
    ENV_WEB_TYPES.to_string()
}

pub fn env_example_mobile(config: &ProjectConfig) -> String {
    render(ENV_EXAMPLE_MOBILE, config)
}

pub fn env_example_web(config: &ProjectConfig) -> String {
    render(ENV_EXAMPLE_WEB, config)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

const JEST_CONFIG: &str = r#"module.exports = {
  preset: 'jest-expo',
  transformIgnorePatterns: [
    'node_modules/(?!((jest-)?react-native|@react-native(-community)?)|expo(nent)?|@expo(nent)?/.*|react-navigation|@react-navigation/.*)',
  ],
};
"#;

const APP_TEST_MOBILE: &str = r#"import { render, screen } from '@testing-library/react-native';
import App from '../App';

describe('App', () => {
  it('shows the project title', () => {
    render(<App />);
    expect(screen.getByText('{{PROJECT_TITLE}}')).toBeTruthy();
  });
});
"#;

const VITEST_CONFIG: &str = r#"import { defineConfig } from 'vitest/config';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
  test: {
    environment: 'jsdom',
    globals: true,
    setupFiles: ['./src/test/setup.ts'],
  },
});
"#;

const TEST_SETUP_WEB: &str = "import '@testing-library/jest-dom/vitest';\n";

const APP_TEST_WEB: &str = r#"import { render, screen } from '@testing-library/react';
import { describe, expect, it } from 'vitest';
import App from './App';

describe('App', () => {
  it('shows the project title', () => {
    render(<App />);
    expect(screen.getByRole('heading', { name: '{{PROJECT_TITLE}}' })).toBeInTheDocument();
  });
});
"#;

pub fn jest_config(_: &ProjectConfig) -> String {
    JEST_CONFIG.to_string()
}

pub fn app_test_mobile(config: &ProjectConfig) -> String {
    render(APP_TEST_MOBILE, config)
}

pub fn vitest_config(_: &ProjectConfig) -> String {
    VITEST_CONFIG.to_string()
}

pub fn test_setup_web(_: &ProjectConfig) -> String {
    TEST_SETUP_WEB.to_string()
}

pub fn app_test_web(config: &ProjectConfig) -> String {
    render(APP_TEST_WEB, config)
}
