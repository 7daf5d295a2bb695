//! Files shared by both platforms.

use trellis_core::domain::{Platform, ProjectConfig};

use super::render;

const GITIGNORE_COMMON: &str = r#"# dependencies
node_modules/

# logs
npm-debug.*
yarn-debug.*
yarn-error.*
*.log

# env
.env
.env.local

# editor
.vscode/
.idea/
.DS_Store
"#;

const GITIGNORE_MOBILE: &str = r#"
# expo
.expo/
dist/
web-build/
ios/
android/
*.jks
*.p8
*.p12
*.key
*.mobileprovision
"#;

const GITIGNORE_WEB: &str = r#"
# vite
dist/
dist-ssr/
coverage/
*.local
"#;

pub fn gitignore(config: &ProjectConfig) -> String {
    let platform = match config.platform() {
        Platform::Mobile => GITIGNORE_MOBILE,
        Platform::Web => GITIGNORE_WEB,
    };
    format!("{GITIGNORE_COMMON}{platform}")
}

const README: &str = r#"# {{PROJECT_TITLE}}

{{TOOLCHAIN}} application using {{STATE}} for state management.

## Getting started

```sh
npm install
{{RUN}}
```

## Layout

```
{{LAYOUT}}
```
"#;

pub fn readme(config: &ProjectConfig) -> String {
    let (run, layout) = match config.platform() {
        Platform::Mobile => (
            "npx expo start",
            concat!(
                "App.tsx            entry component\n",
                "src/screens/        screens\n",
                "src/store/          state",
            ),
        ),
        Platform::Web => (
            "npm run dev",
            concat!(
                "index.html         document shell\n",
                "src/main.tsx       entry point\n",
                "src/components/    components\n",
                "src/store/         state",
            ),
        ),
    };
    render(README, config)
        .replace("{{TOOLCHAIN}}", config.platform().toolchain())
        .replace("{{STATE}}", config.state().display_name())
        .replace("{{RUN}}", run)
        .replace("{{LAYOUT}}", layout)
}
