//! React Native (Expo) baseline files.

use trellis_core::domain::ProjectConfig;

use super::{render, state};

const APP_JSON: &str = r##"{
  "expo": {
    "name": "{{PROJECT_TITLE}}",
    "slug": "{{PROJECT_SLUG}}",
    "version": "1.0.0",
    "orientation": "portrait",
    "userInterfaceStyle": "automatic",
    "ios": {
      "supportsTablet": true
    },
    "android": {
      "adaptiveIcon": {
        "backgroundColor": "#ffffff"
      }
    },
    "web": {
      "bundler": "metro"
    }
  }
}
"##;

const BABEL_CONFIG: &str = r#"module.exports = function (api) {
  api.cache(true);
  return {
    presets: ['babel-preset-expo'],
  };
};
"#;

const TSCONFIG: &str = r#"{
  "extends": "expo/tsconfig.base",
  "compilerOptions": {
    "strict": true,
    "resolveJsonModule": true
  }
}
"#;

pub fn app_json(config: &ProjectConfig) -> String {
    render(APP_JSON, config)
}

pub fn babel_config(_: &ProjectConfig) -> String {
    BABEL_CONFIG.to_string()
}

pub fn tsconfig(_: &ProjectConfig) -> String {
    TSCONFIG.to_string()
}

// ── App.tsx ───────────────────────────────────────────────────────────────────

const APP: &str = r#"import { StatusBar } from 'expo-status-bar';
import { SafeAreaProvider } from 'react-native-safe-area-context';
{{STORE_IMPORTS}}import HomeScreen from './src/screens/HomeScreen';

export default function App() {
  return (
{{OPEN}}{{INDENT}}    <SafeAreaProvider>
{{INDENT}}      <HomeScreen />
{{INDENT}}      <StatusBar style="auto" />
{{INDENT}}    </SafeAreaProvider>
{{CLOSE}}  );
}
"#;

pub fn app(config: &ProjectConfig) -> String {
    state::wrap_in_provider(APP, "./src/store", config.state())
}

// ── HomeScreen.tsx ────────────────────────────────────────────────────────────

const HOME_SCREEN: &str = r#"import { Button, StyleSheet, Text, View } from 'react-native';
{{STORE_IMPORTS}}
{{SIGNATURE}}
{{HOOKS}}

  return (
    <View style={styles.container}>
      <Text style={styles.title}>{{PROJECT_TITLE}}</Text>
      <Text style={styles.count}>{count}</Text>
      <View style={styles.row}>
        <Button title="-" onPress={onDecrement} />
        <Button title="+" onPress={onIncrement} />
      </View>
    </View>
  );
}{{SIGNATURE_END}}

const styles = StyleSheet.create({
  container: {
    flex: 1,
    alignItems: 'center',
    justifyContent: 'center',
    backgroundColor: '#fff',
  },
  title: {
    fontSize: 24,
    fontWeight: '600',
    marginBottom: 16,
  },
  count: {
    fontSize: 48,
    marginBottom: 16,
  },
  row: {
    flexDirection: 'row',
    gap: 16,
  },
});
"#;

pub fn home_screen(config: &ProjectConfig) -> String {
    state::bind_component(&render(HOME_SCREEN, config), "HomeScreen", config.state())
}
