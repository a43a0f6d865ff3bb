// crates/isolate_tests/src/factory.rs

use std::path::Path;

use docs_block_extractor::DocsBlockExtractor;
use isolate_common::markers::SNIPPET_EXTENSION;
use isolate_common::{SnippetExtractor, VerbatimExtractor};
use raw_literal_extractor::{OpenerStyle, RawLiteralExtractor, ScanOptions};
use snippet_emitter::NamingScheme;

use crate::config::AppConfig;

/// How one document is turned into snippets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    Docs,
    /// The file already is a contract source.
    Verbatim,
    RawLiterals(ScanOptions),
}

pub fn mode_for(path: &Path, config: &AppConfig) -> ExtractionMode {
    if config.docs {
        return ExtractionMode::Docs;
    }
    let is_source = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == SNIPPET_EXTENSION)
        .unwrap_or(false);
    if is_source {
        return ExtractionMode::Verbatim;
    }

    let options = if config.named {
        ScanOptions::named()
    } else {
        ScanOptions::hashed()
    };
    let opener = if config.inline {
        OpenerStyle::Inline
    } else {
        OpenerStyle::NextLine
    };
    ExtractionMode::RawLiterals(options.with_opener(opener).with_unterminated(config.unterminated))
}

pub fn create_extractor(mode: ExtractionMode) -> Box<dyn SnippetExtractor> {
    match mode {
        ExtractionMode::Docs => Box::new(DocsBlockExtractor),
        ExtractionMode::Verbatim => Box::new(VerbatimExtractor),
        ExtractionMode::RawLiterals(options) => Box::new(RawLiteralExtractor::new(options)),
    }
}

pub fn naming_scheme(config: &AppConfig) -> NamingScheme {
    if config.named {
        NamingScheme::Ordinal
    } else {
        NamingScheme::ContentHash {
            strip_doc_indent: config.docs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raw_literal_extractor::UnterminatedPolicy;

    #[test]
    fn test_docs_mode_wins_over_extension() {
        let mut config = AppConfig::new("docs");
        config.docs = true;
        assert_eq!(mode_for(Path::new("docs/a.sol"), &config), ExtractionMode::Docs);
        assert_eq!(mode_for(Path::new("docs/a.rst"), &config), ExtractionMode::Docs);
    }

    #[test]
    fn test_sol_files_are_verbatim_in_every_literal_mode() {
        let mut config = AppConfig::new("test");
        assert_eq!(mode_for(Path::new("t/C.sol"), &config), ExtractionMode::Verbatim);
        config.named = true;
        assert_eq!(mode_for(Path::new("t/C.sol"), &config), ExtractionMode::Verbatim);
    }

    #[test]
    fn test_raw_literal_options_follow_config() {
        let mut config = AppConfig::new("test");
        config.named = true;
        config.inline = true;
        config.unterminated = UnterminatedPolicy::Error;
        let expected = ScanOptions::named()
            .with_opener(OpenerStyle::Inline)
            .with_unterminated(UnterminatedPolicy::Error);
        assert_eq!(
            mode_for(Path::new("t/Foo.cpp"), &config),
            ExtractionMode::RawLiterals(expected)
        );
    }

    #[test]
    fn test_naming_scheme() {
        let mut config = AppConfig::new("x");
        assert_eq!(naming_scheme(&config), NamingScheme::ContentHash { strip_doc_indent: false });
        config.docs = true;
        assert_eq!(naming_scheme(&config), NamingScheme::ContentHash { strip_doc_indent: true });
        config.docs = false;
        config.named = true;
        assert_eq!(naming_scheme(&config), NamingScheme::Ordinal);
    }
}
