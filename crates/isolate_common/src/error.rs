// crates/isolate_common/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// A code-start signature sits at the wrong depth inside a documentation block.
    #[error("Indentation error in {}:\n{block}", path.display())]
    Indentation { path: PathBuf, block: String },

    #[error("Unterminated raw literal in {} opened on line {line} (delimiter {delimiter:?})", path.display())]
    UnterminatedLiteral {
        path: PathBuf,
        line: usize,
        delimiter: String,
    },

    #[error("Invalid UTF-8 in {} at byte {offset}", path.display())]
    InvalidEncoding { path: PathBuf, offset: usize },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub fn is_structural(&self) -> bool {
        matches!(self, ExtractError::Indentation { .. })
    }
}
