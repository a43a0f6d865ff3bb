// crates/isolate_common/src/document.rs

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ExtractError;

/// What to do with byte sequences that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingPolicy {
    /// Drop invalid sequences and keep going.
    #[default]
    Discard,
    /// Substitute U+FFFD for each invalid sequence.
    Replace,
    /// Fail the document at the first invalid sequence.
    Strict,
}

impl FromStr for EncodingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "discard" | "ignore" => Ok(EncodingPolicy::Discard),
            "replace" => Ok(EncodingPolicy::Replace),
            "strict" => Ok(EncodingPolicy::Strict),
            other => Err(format!(
                "unknown encoding policy '{}' (expected discard, replace or strict)",
                other
            )),
        }
    }
}

impl fmt::Display for EncodingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncodingPolicy::Discard => "discard",
            EncodingPolicy::Replace => "replace",
            EncodingPolicy::Strict => "strict",
        };
        f.write_str(name)
    }
}

/// A source file held fully in memory. Scanners only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines split on `\n`, each with a trailing `\r` removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// The bare file name, falling back to the whole path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// Reads `path` into a [`Document`], decoding it according to `policy`.
pub fn read_document<P: AsRef<Path>>(path: P, policy: EncodingPolicy) -> Result<Document, ExtractError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode(&bytes, policy).map_err(|offset| ExtractError::InvalidEncoding {
        path: path.to_path_buf(),
        offset,
    })?;
    Ok(Document::new(path, text))
}

/// Decodes `bytes` as UTF-8. On a strict failure returns the offset of the
/// first invalid byte.
fn decode(bytes: &[u8], policy: EncodingPolicy) -> Result<String, usize> {
    match policy {
        EncodingPolicy::Replace => Ok(String::from_utf8_lossy(bytes).into_owned()),
        EncodingPolicy::Strict => match std::str::from_utf8(bytes) {
            Ok(s) => Ok(s.to_string()),
            Err(e) => Err(e.valid_up_to()),
        },
        EncodingPolicy::Discard => {
            let mut out = String::with_capacity(bytes.len());
            let mut rest = bytes;
            let mut dropped = 0usize;
            loop {
                match std::str::from_utf8(rest) {
                    Ok(valid) => {
                        out.push_str(valid);
                        break;
                    }
                    Err(e) => {
                        let (valid, after) = rest.split_at(e.valid_up_to());
                        // `valid_up_to` always ends on a char boundary.
                        out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                        let skip = e.error_len().unwrap_or(after.len());
                        dropped += skip;
                        rest = &after[skip..];
                    }
                }
            }
            if dropped > 0 {
                log::debug!("discarded {} invalid UTF-8 byte(s)", dropped);
            }
            Ok(out)
        }
    }
}
