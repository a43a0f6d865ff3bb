// crates/isolate_tests/src/lib.rs

use anyhow::{Context, Result};
use std::path::PathBuf;

use find_source_documents::find_source_documents;
use isolate_common::{extract_with, read_document};
use snippet_emitter::{DirectorySink, SnippetEmitter, SnippetSink};

pub mod config;
pub mod factory;

pub use config::{build_cli, AppConfig};
pub use factory::{create_extractor, mode_for, naming_scheme, ExtractionMode};

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents: usize,
    /// File names in emission order (repeats when content repeats).
    pub files: Vec<String>,
}

/// Extracts every snippet under `config.input` into `config.output_dir`.
pub fn run(config: &AppConfig) -> Result<RunSummary> {
    let sink = DirectorySink::new(&config.output_dir);
    let (summary, _) = run_with_sink(config, sink)?;
    Ok(summary)
}

/// Same as [`run`] but writes into the supplied sink, which is handed back.
///
/// Documents are processed strictly in walk order; the first structural
/// error stops the run, leaving files already written in place.
pub fn run_with_sink<S: SnippetSink>(config: &AppConfig, sink: S) -> Result<(RunSummary, S)> {
    let documents: Vec<PathBuf> = find_source_documents(&config.input)
        .with_context(|| format!("Failed to collect documents from {}", config.input.display()))?;

    let mut emitter = SnippetEmitter::new(sink, naming_scheme(config));
    let mut summary = RunSummary::default();

    for path in &documents {
        let mode = mode_for(path, config);
        log::debug!("{}: {:?}", path.display(), mode);

        let document = read_document(path, config.encoding)?;
        let extractor = create_extractor(mode);
        let snippets = extract_with(extractor.as_ref(), &document)?;
        emitter.emit_all(&snippets)?;
        summary.documents += 1;
    }

    summary.files = emitter.written().to_vec();
    Ok((summary, emitter.into_sink()))
}
