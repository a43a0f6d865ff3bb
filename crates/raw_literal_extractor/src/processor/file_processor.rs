// crates/raw_literal_extractor/src/processor/file_processor.rs

use isolate_common::{Document, ExtractError, Snippet, SnippetExtractor};

use crate::scanner::{LiteralScanner, ScanOptions};

/// [`SnippetExtractor`] over raw string literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawLiteralExtractor {
    scanner: LiteralScanner,
}

impl RawLiteralExtractor {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            scanner: LiteralScanner::new(options),
        }
    }
}

impl SnippetExtractor for RawLiteralExtractor {
    fn extract(&self, document: &Document) -> Result<Vec<Snippet>, ExtractError> {
        self.scanner.scan(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isolate_common::{read_document, EncodingPolicy};
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn extract_literals_from_file(path: impl AsRef<Path>) -> Result<Vec<Snippet>, ExtractError> {
        let document = read_document(path, EncodingPolicy::Discard)?;
        RawLiteralExtractor::new(ScanOptions::hashed()).extract(&document)
    }

    #[test]
    fn test_extract_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", "code();\nR\"(\ncontract A {}\n)\";\n").unwrap();
        let snippets = extract_literals_from_file(temp_file.path()).unwrap();
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].text, "contract A {}\n");
        assert_eq!(snippets[0].origin(), temp_file.path());
    }

    #[test]
    fn test_extract_from_file_discards_invalid_bytes() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"R\"(\ncontract \xffB {}\n)\";\n").unwrap();
        let snippets = extract_literals_from_file(temp_file.path()).unwrap();
        assert_eq!(snippets[0].text, "contract B {}\n");
    }

    #[test]
    fn test_extract_from_missing_file() {
        let result = extract_literals_from_file("does/not/exist.cpp");
        assert!(matches!(result, Err(ExtractError::Io { .. })));
    }
}
