//! Regular expression testing
//!
//! Runs a pattern against input text and reports every match with its
//! capture groups plus a `<mark>`-highlighted rendering of the input.
//! Flags follow the JavaScript convention: `g` finds all matches instead of
//! the first, `i`/`m`/`s` toggle case folding, multi-line anchors, and
//! dot-matches-newline.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DevKitError, Result};

/// One numbered capture group of a match
///
/// `value` is `None` when the group did not participate in the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureGroup {
    pub group: usize,
    pub value: Option<String>,
}

/// One match with its byte offset, byte length, and capture groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub text: String,
    pub offset: usize,
    pub length: usize,
    pub groups: Vec<CaptureGroup>,
}

/// Matches plus the input with every match wrapped in `<mark>` tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternReport {
    pub matches: Vec<PatternMatch>,
    pub highlighted: String,
}

/// Run `pattern` against `input` under the given flags
///
/// An empty pattern reports no matches and echoes the input unchanged. A
/// pattern that fails to compile returns [`DevKitError::InvalidPattern`]
/// with the engine's diagnostic; a flag outside `gims` returns
/// [`DevKitError::InvalidFlag`].
///
/// # Example
///
/// ```rust
/// use devkit_core::pattern::test_pattern;
///
/// let report = test_pattern("o", "g", "hello world").unwrap();
/// assert_eq!(report.matches.len(), 2);
/// assert_eq!(report.highlighted, "hell<mark>o</mark> w<mark>o</mark>rld");
/// ```
pub fn test_pattern(pattern: &str, flags: &str, input: &str) -> Result<PatternReport> {
    if pattern.is_empty() {
        return Ok(PatternReport {
            matches: Vec::new(),
            highlighted: input.to_string(),
        });
    }

    let mut global = false;
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'g' => global = true,
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            other => return Err(DevKitError::InvalidFlag(other)),
        }
    }
    let regex = builder
        .build()
        .map_err(|e| DevKitError::InvalidPattern(e.to_string()))?;

    let mut matches = Vec::new();
    for caps in regex.captures_iter(input) {
        if let Some(whole) = caps.get(0) {
            let groups = (1..caps.len())
                .map(|i| CaptureGroup {
                    group: i,
                    value: caps.get(i).map(|m| m.as_str().to_string()),
                })
                .collect();
            matches.push(PatternMatch {
                text: whole.as_str().to_string(),
                offset: whole.start(),
                length: whole.len(),
                groups,
            });
        }
        if !global {
            break;
        }
    }
    debug!(match_count = matches.len(), global, "pattern evaluated");

    let mut highlighted = String::with_capacity(input.len());
    let mut last_end = 0;
    for found in &matches {
        highlighted.push_str(&input[last_end..found.offset]);
        highlighted.push_str("<mark>");
        highlighted.push_str(&found.text);
        highlighted.push_str("</mark>");
        last_end = found.offset + found.length;
    }
    highlighted.push_str(&input[last_end..]);

    Ok(PatternReport { matches, highlighted })
}
