// crates/isolate_common/src/lib.rs

//! Shared vocabulary for the test-isolation tool-chain: the fixed markers the
//! scanners look for, the in-memory [`Document`] they scan, the [`Snippet`]
//! they produce, the [`SnippetExtractor`] seam they implement and the
//! [`ExtractError`] they fail with.

pub mod markers;
pub mod document;
pub mod snippet;
pub mod extractor;
pub mod error;

pub use document::{read_document, Document, EncodingPolicy};
pub use error::ExtractError;
pub use extractor::{extract_with, SnippetExtractor, VerbatimExtractor};
pub use snippet::Snippet;
