// crates/raw_literal_extractor/src/lib.rs

//! Extracts the bodies of multi-line raw string literals (`R"tag( … )tag";`)
//! embedded in C++ test sources.
//!
//! Consumers normally go through the processor module:
//!
//! use raw_literal_extractor::processor::RawLiteralExtractor;
//!
//! The lower-level pieces ([`delimiter`] and [`scanner`]) are public for
//! callers that already hold the lines in memory.

pub mod delimiter;
pub mod scanner;
pub mod processor;

pub use delimiter::{DelimiterMatcher, Opener, OpenerStyle};
pub use scanner::{LiteralScanner, ScanOptions, UnterminatedPolicy};
pub use processor::RawLiteralExtractor;
