// crates/raw_literal_extractor/src/delimiter.rs

use isolate_common::markers::{literal_closer, RAW_LITERAL_OPENER, RAW_LITERAL_OPENER_INLINE};
use once_cell::sync::Lazy;
use regex::Regex;

static OPENER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(RAW_LITERAL_OPENER).unwrap());

static OPENER_INLINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(RAW_LITERAL_OPENER_INLINE).unwrap());

/// Where the literal body starts relative to the opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenerStyle {
    /// The opener ends its line; the body starts on the next one.
    #[default]
    NextLine,
    /// The body may start right after the `(` on the opener line.
    Inline,
}

/// A recognised opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    pub delimiter: String,
    /// Text following the `(` on the opener line. Always empty for
    /// [`OpenerStyle::NextLine`].
    pub rest: String,
}

impl Opener {
    /// The exact token that closes this literal.
    pub fn closer(&self) -> String {
        literal_closer(&self.delimiter)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DelimiterMatcher {
    style: OpenerStyle,
}

impl DelimiterMatcher {
    pub fn new(style: OpenerStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> OpenerStyle {
        self.style
    }

    /// Returns the opener found at the end of `line`, if any.
    pub fn match_opener(&self, line: &str) -> Option<Opener> {
        let trimmed = line.trim();
        match self.style {
            OpenerStyle::NextLine => OPENER_RE.captures(trimmed).map(|cap| Opener {
                delimiter: cap[1].to_string(),
                rest: String::new(),
            }),
            OpenerStyle::Inline => OPENER_INLINE_RE.captures(trimmed).map(|cap| Opener {
                delimiter: cap[1].to_string(),
                rest: cap[2].to_string(),
            }),
        }
    }
}

/// If `line` ends with the closer for `delimiter`, returns the text in front
/// of the closer (trailing whitespace removed, leading whitespace kept).
pub fn strip_closer<'a>(line: &'a str, delimiter: &str) -> Option<&'a str> {
    line.trim_end().strip_suffix(literal_closer(delimiter).as_str())
}
