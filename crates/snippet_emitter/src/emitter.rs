// crates/snippet_emitter/src/emitter.rs

use anyhow::Result;
use isolate_common::Snippet;

use crate::naming::{hashed_file_name, ordinal_file_name, sanitize_origin, sanitize_test_name, strip_doc_indent};
use crate::sink::{SnippetSink, WriteOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingScheme {
    /// `test_<digest>_<origin>.sol`; optionally drop the 4-space doc indent
    /// from the written text (the digest is always over the unstripped text).
    ContentHash { strip_doc_indent: bool },
    /// `<NNN>_<name>.sol` with a run-wide ordinal; text written as-is.
    Ordinal,
}

/// Names and writes snippets. One emitter per run: the ordinal counter
/// starts at 1 and advances once per written snippet.
pub struct SnippetEmitter<S: SnippetSink> {
    sink: S,
    scheme: NamingScheme,
    ordinal: usize,
    written: Vec<String>,
}

impl<S: SnippetSink> SnippetEmitter<S> {
    pub fn new(sink: S, scheme: NamingScheme) -> Self {
        Self {
            sink,
            scheme,
            ordinal: 0,
            written: Vec::new(),
        }
    }

    /// File names written so far, in emission order.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Writes one snippet and returns the file name used.
    pub fn emit(&mut self, snippet: &Snippet) -> Result<String> {
        let origin = snippet.origin_file_name();
        let (file_name, contents, next_ordinal) = match self.scheme {
            NamingScheme::ContentHash { strip_doc_indent: strip } => {
                let contents = if strip {
                    strip_doc_indent(&snippet.text)
                } else {
                    snippet.text.clone()
                };
                (hashed_file_name(&snippet.text, &origin), contents, self.ordinal)
            }
            NamingScheme::Ordinal => {
                let name = match &snippet.name {
                    Some(name) => sanitize_test_name(name),
                    None => sanitize_origin(&origin),
                };
                let ordinal = self.ordinal + 1;
                (ordinal_file_name(ordinal, &name), snippet.text.clone(), ordinal)
            }
        };

        match self.sink.write(&file_name, &contents)? {
            WriteOutcome::Created => log::debug!("wrote {} (from {})", file_name, origin),
            WriteOutcome::Unchanged => log::debug!("{} already up to date (from {})", file_name, origin),
            WriteOutcome::Overwritten => {
                log::warn!("overwrote {} with different contents (from {})", file_name, origin)
            }
        }

        self.ordinal = next_ordinal;
        self.written.push(file_name.clone());
        Ok(file_name)
    }

    pub fn emit_all<'a, I>(&mut self, snippets: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = &'a Snippet>,
    {
        snippets.into_iter().map(|snippet| self.emit(snippet)).collect()
    }
}
