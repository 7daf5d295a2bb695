//! Import scanning for generated JavaScript/TypeScript sources.
//!
//! This is a line-oriented approximation, not a parser. It recognises the
//! forms the built-in content builders emit:
//!
//! ```text
//! import x from 'pkg'            export { y } from './y'
//! import 'side-effect'           import type { T } from '../t'
//! const m = await import('pkg')  const c = require('pkg')
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::common;

static FROM_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*(?:import|export)\b[^'";]*?\bfrom\s*['"]([^'"]+)['"]"#)
        .expect("valid import/export regex")
});

static SIDE_EFFECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*import\s*['"]([^'"]+)['"]"#).expect("valid side-effect regex")
});

static CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(?:import|require)\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid call regex")
});

const SCANNED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];
const RESOLVE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "json"];

/// Whether files at `path` are scanned for imports.
pub fn is_scanned(path: &str) -> bool {
    common::extension(path).is_some_and(|ext| SCANNED_EXTENSIONS.contains(&ext))
}

/// Every module specifier in `source`, in order of first appearance.
pub fn specifiers(source: &str) -> Vec<&str> {
    let mut found: Vec<(usize, &str)> = [&*FROM_CLAUSE, &*SIDE_EFFECT, &*CALL]
        .into_iter()
        .flat_map(|re| re.captures_iter(source))
        .filter_map(|caps| caps.get(1))
        .map(|m| (m.start(), m.as_str()))
        .collect();
    found.sort_unstable_by_key(|(pos, _)| *pos);

    let mut out: Vec<&str> = Vec::new();
    for (_, spec) in found {
        if !out.contains(&spec) {
            out.push(spec);
        }
    }
    out
}

/// What an import specifier points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A project-relative file path, not yet checked for existence.
    Local(String),
    /// An npm package name.
    Package(String),
    /// A runtime builtin (`node:fs`).
    Builtin,
    /// A relative specifier escaping the project root.
    OutsideRoot,
}

/// Classify `specifier` as seen from the file at `importer`.
pub fn classify(importer: &str, specifier: &str) -> Target {
    if specifier.starts_with("node:") {
        return Target::Builtin;
    }
    if let Some(rooted) = specifier.strip_prefix('/') {
        return Target::Local(rooted.to_string());
    }
    if specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier == "."
        || specifier == ".."
    {
        return match common::join_relative(common::parent(importer), specifier) {
            Some(path) => Target::Local(path),
            None => Target::OutsideRoot,
        };
    }
    Target::Package(package_name(specifier).to_string())
}

/// The package a bare specifier belongs to: `@scope/name` or the first
/// path segment.
pub fn package_name(specifier: &str) -> &str {
    let mut cut = specifier.match_indices('/').map(|(i, _)| i);
    let end = if specifier.starts_with('@') {
        cut.nth(1)
    } else {
        cut.next()
    };
    end.map_or(specifier, |i| &specifier[..i])
}

/// Candidate file paths a local import may resolve to, in lookup order.
pub fn candidates(path: &str) -> Vec<String> {
    let mut out = vec![path.to_string()];
    out.extend(RESOLVE_EXTENSIONS.iter().map(|ext| format!("{path}.{ext}")));
    let base = if path.is_empty() {
        String::new()
    } else {
        format!("{path}/")
    };
    out.push(format!("{base}index.ts"));
    out.push(format!("{base}index.tsx"));
    out
}
