//! Content builders for the built-in catalog.
//!
//! Every builder is a plain `fn(&ProjectConfig) -> String`. Builders make
//! no inclusion decisions; they only format text. Text that varies with
//! the project name uses `{{VARIABLE}}` placeholders filled by [`render`].
//!
//! A builder may read the name, platform, state library and (for analytics
//! files) the chosen provider. It must never read another feature toggle:
//! enabling one feature never changes a file owned by something else.

pub mod common;
pub mod features;
pub mod mobile;
pub mod state;
pub mod web;

use trellis_core::domain::ProjectConfig;

/// Replace `{{PROJECT_NAME}}`, `{{PROJECT_TITLE}}` and `{{PROJECT_SLUG}}`.
///
/// Unknown placeholders are left as-is.
pub fn render(template: &str, config: &ProjectConfig) -> String {
    let vars = [
        ("PROJECT_NAME", config.name().to_string()),
        ("PROJECT_TITLE", title_case(config.name())),
        ("PROJECT_SLUG", config.package_name()),
    ];

    let mut result = template.to_string();
    for (key, value) in &vars {
        let placeholder = format!("{{{{{key}}}}}");
        result = result.replace(&placeholder, value);
    }
    result
}

/// `my-cool_app` → `My Cool App`.
pub fn title_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
