//! Identifier case conversion
//!
//! One tokenizer feeds every converter: separator runs and case boundaries
//! split the input into words, and each converter re-joins them with its own
//! casing and joiner. All functions are infallible; empty input produces
//! empty output.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\-]+").unwrap());
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static CASE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Split an identifier into its word tokens
///
/// Underscore and hyphen runs become separators, an uppercase run followed
/// by a capitalized word splits before its last letter (`XMLHttp` →
/// `XML Http`), and a lowercase letter or digit followed by an uppercase
/// letter splits between them (`helloWorld` → `hello World`).
///
/// # Arguments
///
/// * `input` - Identifier in any mixture of camel, snake, kebab, or spaced style
///
/// # Returns
///
/// The word tokens in input order; empty input yields no tokens
pub fn tokenize(input: &str) -> Vec<String> {
    let spaced = SEPARATOR_RUNS.replace_all(input, " ");
    let spaced = ACRONYM_BOUNDARY.replace_all(&spaced, "$1 $2");
    let spaced = CASE_BOUNDARY.replace_all(&spaced, "$1 $2");
    spaced.split_whitespace().map(str::to_string).collect()
}

/// Convert an identifier to camelCase
pub fn to_camel_case(input: &str) -> String {
    tokenize(input)
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let lower = token.to_lowercase();
            if i == 0 {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect()
}

/// Convert an identifier to snake_case
///
/// # Example
///
/// ```rust
/// use devkit_core::case::to_snake_case;
///
/// assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
/// assert_eq!(to_snake_case("helloWorld"), "hello_world");
/// ```
pub fn to_snake_case(input: &str) -> String {
    tokenize(input)
        .iter()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert an identifier to kebab-case
pub fn to_kebab_case(input: &str) -> String {
    tokenize(input)
        .iter()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert an identifier to Title Case with space separators
pub fn to_title_case(input: &str) -> String {
    tokenize(input)
        .iter()
        .map(|token| capitalize(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
