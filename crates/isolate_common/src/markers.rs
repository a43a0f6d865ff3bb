// crates/isolate_common/src/markers.rs

//! Fixed textual markers shared by the scanners, the walker and the emitter.

/// Regex body matching a raw-literal opener at the end of a trimmed line.
/// Group 1 captures the delimiter tag.
pub const RAW_LITERAL_OPENER: &str = r#"R"([^(]*)\($"#;

/// Same as [`RAW_LITERAL_OPENER`] but content may follow the `(`.
/// Group 2 captures the text after the opener.
pub const RAW_LITERAL_OPENER_INLINE: &str = r#"R"([^(]*)\((.*)$"#;

/// Regex matching a named test declaration. Group 1 captures the test name.
pub const TEST_CASE_DECLARATION: &str = r"BOOST_AUTO_TEST_CASE\(([^(]*)\)";

/// Alternation of the patterns that mark the start of real contract code.
pub const CODE_START: &str =
    r"(?:// SPDX-License-Identifier:|pragma solidity|contract.*\{|library.*\{|interface.*\{)";

/// Indentation that documentation listings are nested under.
pub const DOC_INDENT: usize = 4;

/// Width a tab expands to inside a raw literal.
pub const TAB_WIDTH: usize = 8;

/// Extension of the emitted snippets and of source files read verbatim.
pub const SNIPPET_EXTENSION: &str = "sol";

/// Prefix of content-hash file names.
pub const HASHED_FILE_PREFIX: &str = "test_";

/// Second positional argument selecting documentation mode.
pub const DOCS_MODE_ARG: &str = "docs";

/// Directory names never descended into.
pub const EXCLUDED_DIRS: &[&str] = &["_build", "compilationTests"];

/// Files skipped during a walk (known to contain broken UTF-8 on purpose).
pub const SKIPPED_FILES: &[&str] = &["invalid_utf8_sequence.sol"];

/// Builds the closer that terminates a literal opened with `delimiter`.
pub fn literal_closer(delimiter: &str) -> String {
    format!("){}\";", delimiter)
}
