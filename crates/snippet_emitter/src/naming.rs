// crates/snippet_emitter/src/naming.rs

//! File-name derivation for emitted snippets.
//!
//! * content-hash names: `test_<sha256 of text>_<origin>.sol`
//! * ordinal names:      `<NNN>_<test name>.sol`

use isolate_common::markers::{DOC_INDENT, HASHED_FILE_PREFIX, SNIPPET_EXTENSION};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `text`.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Replaces `.`, `-` and spaces with `_` and lowercases the rest.
pub fn sanitize_origin(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| match c {
            '.' | '-' | ' ' => '_',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Keeps ASCII alphanumerics and `_`, case preserved; anything else becomes `_`.
pub fn sanitize_test_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Removes exactly one documentation indent from the start of every line
/// that has it.
pub fn strip_doc_indent(text: &str) -> String {
    let indent = " ".repeat(DOC_INDENT);
    text.split_inclusive('\n')
        .map(|line| line.strip_prefix(indent.as_str()).unwrap_or(line))
        .collect()
}

pub fn hashed_file_name(text: &str, origin_file_name: &str) -> String {
    format!(
        "{}{}_{}.{}",
        HASHED_FILE_PREFIX,
        content_digest(text),
        sanitize_origin(origin_file_name),
        SNIPPET_EXTENSION
    )
}

pub fn ordinal_file_name(ordinal: usize, name: &str) -> String {
    format!("{:03}_{}.{}", ordinal, name, SNIPPET_EXTENSION)
}
