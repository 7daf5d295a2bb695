//! The ordered output of the resolver.

use serde::Serialize;

/// One generated file, tagged with the predicate that admitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    pub path: String,
    pub content: String,
    pub origin: &'static str,
}

/// Ordered set of generated files, in table declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedFileSet {
    files: Vec<ResolvedFile>,
}

impl ResolvedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: ResolvedFile) {
        self.files.push(file);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedFile> {
        self.files.iter()
    }

    pub fn get(&self, path: &str) -> Option<&ResolvedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    /// Total bytes of generated content.
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.content.len()).sum()
    }
}

impl FromIterator<ResolvedFile> for ResolvedFileSet {
    fn from_iter<I: IntoIterator<Item = ResolvedFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResolvedFileSet {
    type Item = &'a ResolvedFile;
    type IntoIter = std::slice::Iter<'a, ResolvedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl IntoIterator for ResolvedFileSet {
    type Item = ResolvedFile;
    type IntoIter = std::vec::IntoIter<ResolvedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
