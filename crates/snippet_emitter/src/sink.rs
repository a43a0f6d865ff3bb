// crates/snippet_emitter/src/sink.rs

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// What a write did to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// A file with identical contents already existed.
    Unchanged,
    /// A file with different contents was replaced.
    Overwritten,
}

/// Destination for emitted snippet files.
pub trait SnippetSink {
    fn write(&mut self, file_name: &str, contents: &str) -> Result<WriteOutcome>;
}

/// Writes snippets as files into one directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

}

impl SnippetSink for DirectorySink {
    fn write(&mut self, file_name: &str, contents: &str) -> Result<WriteOutcome> {
        let path = self.dir.join(file_name);
        let outcome = match fs::read(&path) {
            Ok(existing) if existing == contents.as_bytes() => WriteOutcome::Unchanged,
            Ok(_) => WriteOutcome::Overwritten,
            Err(_) => WriteOutcome::Created,
        };
        fs::write(&path, contents).with_context(|| format!("Error writing {}", path.display()))?;
        Ok(outcome)
    }
}

/// Keeps snippets in memory, keyed by file name. Same collision semantics as
/// [`DirectorySink`].
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnippetSink for MemorySink {
    fn write(&mut self, file_name: &str, contents: &str) -> Result<WriteOutcome> {
        let outcome = match self.files.get(file_name) {
            Some(existing) if existing == contents => WriteOutcome::Unchanged,
            Some(_) => WriteOutcome::Overwritten,
            None => WriteOutcome::Created,
        };
        self.files.insert(file_name.to_string(), contents.to_string());
        Ok(outcome)
    }
}
