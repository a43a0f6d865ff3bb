// crates/isolate_common/src/snippet.rs

use std::path::{Path, PathBuf};

/// One extracted unit of embedded source text, destined for its own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    /// Test name, only set by the named-capture scanner.
    pub name: Option<String>,
    pub origin: PathBuf,
}

impl Snippet {
    pub fn new(text: impl Into<String>, origin: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            name: None,
            origin: origin.into(),
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// File name of the origin, falling back to the whole path.
    pub fn origin_file_name(&self) -> String {
        self.origin
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.origin.to_string_lossy().into_owned())
    }
}
