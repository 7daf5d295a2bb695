//! React (Vite) baseline files.

use trellis_core::domain::ProjectConfig;

use super::{render, state};

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{PROJECT_TITLE}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
});
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "useDefineForClassFields": true,
    "lib": ["ES2020", "DOM", "DOM.Iterable"],
    "module": "ESNext",
    "skipLibCheck": true,
    "moduleResolution": "bundler",
    "allowImportingTsExtensions": true,
    "resolveJsonModule": true,
    "isolatedModules": true,
    "noEmit": true,
    "jsx": "react-jsx",
    "strict": true,
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "noFallthroughCasesInSwitch": true
  },
  "include": ["src"]
}
"#;

const VITE_ENV: &str = "/// <reference types=\"vite/client\" />\n";

const MAIN: &str = r#"import { StrictMode } from 'react';
import { createRoot } from 'react-dom/client';
import App from './App';
import './index.css';

const container = document.getElementById('root');
if (!container) {
  throw new Error('Missing #root element');
}

createRoot(container).render(
  <StrictMode>
    <App />
  </StrictMode>,
);
"#;

const INDEX_CSS: &str = r#":root {
  font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.5;
  color: #213547;
  background-color: #ffffff;
}

body {
  margin: 0;
  display: flex;
  place-items: center;
  min-height: 100vh;
}

.app {
  margin: 0 auto;
  text-align: center;
}

.counter {
  display: inline-flex;
  gap: 1rem;
  align-items: center;
  font-size: 2rem;
}

.counter button {
  font-size: 1.5rem;
  min-width: 3rem;
  cursor: pointer;
}
"#;

pub fn index_html(config: &ProjectConfig) -> String {
    render(INDEX_HTML, config)
}

pub fn vite_config(_: &ProjectConfig) -> String {
    VITE_CONFIG.to_string()
}

pub fn tsconfig(_: &ProjectConfig) -> String {
    TSCONFIG.to_string()
}

pub fn vite_env(_: &ProjectConfig) -> String {
    VITE_ENV.to_string()
}

pub fn main(_: &ProjectConfig) -> String {
    MAIN.to_string()
}

pub fn index_css(_: &ProjectConfig) -> String {
    INDEX_CSS.to_string()
}

// ── Components ────────────────────────────────────────────────────────────────

const APP: &str = r#"{{STORE_IMPORTS}}import Counter from './components/Counter';

export default function App() {
  return (
{{OPEN}}{{INDENT}}    <main className="app">
{{INDENT}}      <h1>{{PROJECT_TITLE}}</h1>
{{INDENT}}      <Counter />
{{INDENT}}    </main>
{{CLOSE}}  );
}
"#;

const COUNTER: &str = r#"{{STORE_IMPORTS}}
{{SIGNATURE}}
{{HOOKS}}

  return (
    <div className="counter">
      <button type="button" aria-label="decrement" onClick={onDecrement}>
        -
      </button>
      <span aria-live="polite">{count}</span>
      <button type="button" aria-label="increment" onClick={onIncrement}>
        +
      </button>
    </div>
  );
}{{SIGNATURE_END}}
"#;

pub fn app(config: &ProjectConfig) -> String {
    state::wrap_in_provider(&render(APP, config), "./store", config.state())
}

pub fn counter(config: &ProjectConfig) -> String {
    state::bind_component(COUNTER, "Counter", config.state())
}
