// crates/snippet_emitter/src/lib.rs

pub mod naming;
pub mod sink;
pub mod emitter;

pub use emitter::{NamingScheme, SnippetEmitter};
pub use sink::{DirectorySink, MemorySink, SnippetSink, WriteOutcome};
