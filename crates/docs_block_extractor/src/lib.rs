// crates/docs_block_extractor/src/lib.rs

//! Pulls indented code listings out of reStructuredText documentation.
//!
//! Contract sources in the docs are indented by 4 spaces. Every indented
//! region becomes a candidate block ([`block_scanner`]); a candidate is kept
//! only if it starts real contract code at exactly that depth, and a code
//! start at a shallower depth aborts the run ([`signature`]).

pub mod block_scanner;
pub mod signature;

use isolate_common::{Document, ExtractError, Snippet, SnippetExtractor};

pub use block_scanner::scan_blocks;
pub use signature::{classify_block, filter_blocks, BlockClass};

/// [`SnippetExtractor`] over indented documentation blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocsBlockExtractor;

impl SnippetExtractor for DocsBlockExtractor {
    fn extract(&self, document: &Document) -> Result<Vec<Snippet>, ExtractError> {
        let blocks = scan_blocks(document.lines());
        let candidates = blocks.len();
        let accepted = filter_blocks(document.path(), blocks)?;
        log::debug!(
            "{}: {} of {} indented block(s) hold code",
            document.path().display(),
            accepted.len(),
            candidates
        );
        Ok(accepted
            .into_iter()
            .map(|block| Snippet::new(block, document.path()))
            .collect())
    }
}
