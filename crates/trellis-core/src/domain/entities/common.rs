//! POSIX-style relative path helpers.
//!
//! Generated paths are always `/`-separated and relative to the project
//! root, regardless of the host OS. Host path conversion happens only in
//! the filesystem adapters.

use super::DomainError;

/// Check that `path` is a clean relative POSIX path: non-empty, no leading
/// `/`, no `\`, no empty, `.` or `..` segments.
pub fn check_relative(path: &str) -> Result<(), DomainError> {
    let bad = |why: &str| Err(DomainError::InvalidBlueprint(format!("path '{path}' {why}")));

    if path.is_empty() {
        return bad("is empty");
    }
    if path.starts_with('/') {
        return bad("must be relative");
    }
    if path.contains('\\') {
        return bad("must use '/' separators");
    }
    if path
        .split('/')
        .any(|seg| seg.is_empty() || seg == "." || seg == "..")
    {
        return bad("must not contain empty, '.' or '..' segments");
    }
    Ok(())
}

/// Directory part of a relative path (`""` for files at the root).
pub fn parent(path: &str) -> &str {
    path.rfind('/').map_or("", |i| &path[..i])
}

/// Resolve `specifier` (`./x`, `../y/z`) against directory `dir`.
///
/// Returns `None` when the specifier climbs above the project root.
pub fn join_relative(dir: &str, specifier: &str) -> Option<String> {
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for seg in specifier.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    Some(segments.join("/"))
}

/// File extension without the dot.
pub fn extension(path: &str) -> Option<&str> {
    let name = &path[path.rfind('/').map_or(0, |i| i + 1)..];
    name.rfind('.').filter(|&i| i > 0).map(|i| &name[i + 1..])
}
