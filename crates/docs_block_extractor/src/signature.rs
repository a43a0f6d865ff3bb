// crates/docs_block_extractor/src/signature.rs

use std::path::Path;

use isolate_common::markers::{CODE_START, DOC_INDENT};
use isolate_common::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;

// A code start indented by fewer than DOC_INDENT blanks.
static MISINDENTED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?m)^[ \t]{{0,{}}}{}", DOC_INDENT - 1, CODE_START)).unwrap()
});

// A code start indented by exactly DOC_INDENT blanks.
static ACCEPTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?m)^[ \t]{{{}}}{}", DOC_INDENT, CODE_START)).unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockClass {
    /// Code starts too shallow; the docs are malformed.
    Misindented,
    /// Code starts at the expected depth.
    Code,
    /// No code start at the expected depth.
    Prose,
}

pub fn classify_block(block: &str) -> BlockClass {
    if MISINDENTED_RE.is_match(block) {
        BlockClass::Misindented
    } else if ACCEPTED_RE.is_match(block) {
        BlockClass::Code
    } else {
        BlockClass::Prose
    }
}

/// Keeps the blocks that hold code. The first misindented block aborts the
/// whole document.
pub fn filter_blocks(path: &Path, blocks: Vec<String>) -> Result<Vec<String>, ExtractError> {
    let mut accepted = Vec::new();
    for block in blocks {
        match classify_block(&block) {
            BlockClass::Misindented => {
                return Err(ExtractError::Indentation {
                    path: path.to_path_buf(),
                    block,
                })
            }
            BlockClass::Code => accepted.push(block),
            BlockClass::Prose => {}
        }
    }
    Ok(accepted)
}
