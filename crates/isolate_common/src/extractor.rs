// crates/isolate_common/src/extractor.rs

use crate::document::Document;
use crate::error::ExtractError;
use crate::snippet::Snippet;

/// Turns one document into the snippets it embeds.
///
/// Implemented once per extraction mode (raw literals, documentation blocks,
/// verbatim source files); the orchestrator picks one per document.
pub trait SnippetExtractor {
    fn extract(&self, document: &Document) -> Result<Vec<Snippet>, ExtractError>;
}

/// Public API function to run a provided extractor over a document.
pub fn extract_with(extractor: &dyn SnippetExtractor, document: &Document) -> Result<Vec<Snippet>, ExtractError> {
    extractor.extract(document)
}

/// Treats the whole document as a single snippet. Used for files that are
/// already plain contract sources.
pub struct VerbatimExtractor;

impl SnippetExtractor for VerbatimExtractor {
    fn extract(&self, document: &Document) -> Result<Vec<Snippet>, ExtractError> {
        Ok(vec![Snippet::new(document.text(), document.path())])
    }
}
