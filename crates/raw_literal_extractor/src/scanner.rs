// crates/raw_literal_extractor/src/scanner.rs

use std::fmt;
use std::str::FromStr;

use isolate_common::markers::{TAB_WIDTH, TEST_CASE_DECLARATION};
use isolate_common::{Document, ExtractError, Snippet};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::delimiter::{strip_closer, DelimiterMatcher, OpenerStyle};

static TEST_CASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(TEST_CASE_DECLARATION).unwrap());

/// What happens to a literal that is still open at end of document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedPolicy {
    /// Drop the partial literal and log a warning.
    #[default]
    Warn,
    /// Fail the document.
    Error,
}

impl FromStr for UnterminatedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warn" | "drop" => Ok(UnterminatedPolicy::Warn),
            "error" | "strict" => Ok(UnterminatedPolicy::Error),
            other => Err(format!(
                "unknown unterminated-literal policy '{}' (expected warn or error)",
                other
            )),
        }
    }
}

impl fmt::Display for UnterminatedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnterminatedPolicy::Warn => f.write_str("warn"),
            UnterminatedPolicy::Error => f.write_str("error"),
        }
    }
}

/// Knobs selecting one of the literal-scanning variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub opener: OpenerStyle,
    /// Track `BOOST_AUTO_TEST_CASE(name)` and attach the name to snippets.
    pub capture_names: bool,
    /// Drop a leading double tab and expand remaining tabs.
    pub normalize_tabs: bool,
    pub unterminated: UnterminatedPolicy,
}

impl ScanOptions {
    /// Options for content-hash extraction: no names, text kept as-is.
    pub fn hashed() -> Self {
        Self::default()
    }

    /// Options for named extraction: names captured, tabs normalised.
    pub fn named() -> Self {
        Self {
            capture_names: true,
            normalize_tabs: true,
            ..Self::default()
        }
    }

    pub fn with_opener(mut self, opener: OpenerStyle) -> Self {
        self.opener = opener;
        self
    }

    pub fn with_unterminated(mut self, policy: UnterminatedPolicy) -> Self {
        self.unterminated = policy;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LiteralState {
    Outside,
    Inside {
        delimiter: String,
        opened_at: usize,
        name: Option<String>,
        body: String,
    },
}

/// Line-by-line state machine collecting raw literal bodies in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralScanner {
    options: ScanOptions,
    matcher: DelimiterMatcher,
}

impl LiteralScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            matcher: DelimiterMatcher::new(options.opener),
        }
    }

    pub fn scan(&self, document: &Document) -> Result<Vec<Snippet>, ExtractError> {
        let mut snippets = Vec::new();
        let mut state = LiteralState::Outside;
        let mut test_name: Option<String> = None;

        for (idx, line) in document.lines().enumerate() {
            state = match state {
                LiteralState::Inside {
                    delimiter,
                    opened_at,
                    name,
                    mut body,
                } => match strip_closer(line, &delimiter) {
                    Some(prefix) => {
                        if self.matcher.style() == OpenerStyle::Inline {
                            self.push_fragment(&mut body, prefix);
                        }
                        snippets.push(Snippet::new(body, document.path()).with_name(name));
                        LiteralState::Outside
                    }
                    None => {
                        self.push_line(&mut body, line);
                        LiteralState::Inside {
                            delimiter,
                            opened_at,
                            name,
                            body,
                        }
                    }
                },
                LiteralState::Outside => {
                    if self.options.capture_names {
                        if let Some(cap) = TEST_CASE_RE.captures(line.trim()) {
                            test_name = Some(cap[1].to_string());
                        }
                    }
                    match self.matcher.match_opener(line) {
                        Some(opener) => {
                            let name = test_name.clone();
                            let mut body = String::new();
                            // Inline literals may open and close on one line.
                            if let Some(prefix) = strip_closer(&opener.rest, &opener.delimiter) {
                                self.push_fragment(&mut body, prefix);
                                snippets.push(Snippet::new(body, document.path()).with_name(name));
                                LiteralState::Outside
                            } else {
                                self.push_opening_text(&mut body, &opener.rest);
                                LiteralState::Inside {
                                    delimiter: opener.delimiter,
                                    opened_at: idx + 1,
                                    name,
                                    body,
                                }
                            }
                        }
                        None => LiteralState::Outside,
                    }
                }
            };
        }

        if let LiteralState::Inside {
            delimiter, opened_at, ..
        } = state
        {
            match self.options.unterminated {
                UnterminatedPolicy::Warn => {
                    log::warn!(
                        "dropping unterminated raw literal in {} opened on line {} (delimiter {:?})",
                        document.path().display(),
                        opened_at,
                        delimiter
                    );
                }
                UnterminatedPolicy::Error => {
                    return Err(ExtractError::UnterminatedLiteral {
                        path: document.path().to_path_buf(),
                        line: opened_at,
                        delimiter,
                    });
                }
            }
        }

        log::debug!(
            "{}: {} raw literal(s)",
            document.path().display(),
            snippets.len()
        );
        Ok(snippets)
    }

    fn push_line(&self, body: &mut String, line: &str) {
        self.push_fragment(body, line);
        body.push('\n');
    }

    /// Appends text without a line break; the closing line of an inline
    /// literal ends the body exactly where the closer starts.
    fn push_fragment(&self, body: &mut String, text: &str) {
        if self.options.normalize_tabs {
            body.push_str(&normalize_tabs(text));
        } else {
            body.push_str(text);
        }
    }

    /// Text after an inline opener is a body line of its own unless blank.
    fn push_opening_text(&self, body: &mut String, text: &str) {
        if !text.trim().is_empty() {
            self.push_line(body, text);
        }
    }
}

/// Removes one leading double tab, then expands every remaining tab.
pub fn normalize_tabs(line: &str) -> String {
    let line = line.strip_prefix("\t\t").unwrap_or(line);
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}
