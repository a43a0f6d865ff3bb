// crates/raw_literal_extractor/src/processor/mod.rs

pub mod file_processor;

pub use file_processor::RawLiteralExtractor;
