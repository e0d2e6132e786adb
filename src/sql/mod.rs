//! SQL reflow and minification
//!
//! A best-effort textual formatter, not an AST-based one: a fixed sequence
//! of regex rewrite passes breaks clauses onto their own lines, uppercases
//! reserved words, and re-indents. Unrecognized dialects pass through
//! reflowed, never rejected.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::Result;

/// Reserved words uppercased wherever they appear as whole tokens
const RESERVED_WORDS: [&str; 69] = [
    "SELECT", "FROM", "WHERE", "JOIN", "LEFT", "RIGHT", "INNER", "OUTER", "FULL",
    "ON", "AS", "AND", "OR", "NOT", "IN", "EXISTS", "BETWEEN", "LIKE", "IS", "NULL",
    "ORDER", "BY", "GROUP", "HAVING", "UNION", "ALL", "DISTINCT", "TOP", "LIMIT",
    "OFFSET", "FETCH", "WITH", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE",
    "CREATE", "TABLE", "ALTER", "DROP", "INDEX", "VIEW", "PROCEDURE", "FUNCTION",
    "IF", "ELSE", "CASE", "WHEN", "THEN", "END", "BEGIN", "COMMIT", "ROLLBACK",
    "TRANSACTION", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "UNIQUE", "DEFAULT",
    "CHECK", "CONSTRAINT", "CASCADE", "RESTRICT", "GRANT", "REVOKE", "EXECUTE",
];

/// Clause keywords that open a new line
const NEWLINE_KEYWORDS: [&str; 10] = [
    "SELECT", "FROM", "WHERE", "ORDER BY", "GROUP BY", "HAVING", "UNION", "SET",
    "VALUES", "WITH",
];

/// Compound clause keywords, placeholder-protected from the single-word pass
const COMPOUND_KEYWORDS: [&str; 7] = [
    "LEFT JOIN", "RIGHT JOIN", "INNER JOIN", "OUTER JOIN", "FULL JOIN",
    "INSERT INTO", "DELETE FROM",
];

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static COMPOUND_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    COMPOUND_KEYWORDS
        .iter()
        .map(|kw| {
            let words = kw.replace(' ', r"\s+");
            Regex::new(&format!(r"(?i)\s+{words}\s+")).unwrap()
        })
        .collect()
});

static NEWLINE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NEWLINE_KEYWORDS
        .iter()
        .map(|kw| {
            let words = kw.replace(' ', r"\s+");
            Regex::new(&format!(r"(?i)\s+({words})\s+")).unwrap()
        })
        .collect()
});

static RESERVED_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = RESERVED_WORDS.join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).unwrap()
});

static OPEN_SELECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\(\s*SELECT").unwrap());
static CLOSE_PAREN_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\)\s*([A-Z])").unwrap());
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());
static LINE_COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)--.*$").unwrap());
static BLOCK_COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Reflow a SQL statement onto clause-per-line layout
///
/// Passes run in a fixed order: whitespace collapse, compound-keyword
/// protection, clause newlines, whole-token keyword uppercasing, placeholder
/// restore, subquery parenthesis breaks, depth-tracked indentation, and
/// blank-line collapse. Keywords inside string literals are uppercased like
/// any other token; the passes carry no literal awareness.
///
/// # Arguments
///
/// * `sql` - The statement to reflow, in any supported or unsupported dialect
///
/// # Returns
///
/// The reflowed statement; empty or whitespace-only input yields an empty
/// string
///
/// # Example
///
/// ```rust
/// use devkit_core::sql::format;
///
/// let formatted = format("select * from users where id = 1").unwrap();
/// assert_eq!(formatted, "SELECT *\nFROM users\nWHERE id = 1");
/// ```
pub fn format(sql: &str) -> Result<String> {
    if sql.trim().is_empty() {
        return Ok(String::new());
    }
    debug!(input_len = sql.len(), "reflowing sql");

    let mut formatted = WHITESPACE_RUNS.replace_all(sql.trim(), " ").into_owned();

    // Compound keywords become single placeholder tokens so the single-word
    // pass cannot split them
    for (i, re) in COMPOUND_RES.iter().enumerate() {
        let placeholder = format!("\n__KW{i}__ ");
        formatted = re.replace_all(&formatted, placeholder.as_str()).into_owned();
    }

    for re in NEWLINE_RES.iter() {
        formatted = re.replace_all(&formatted, "\n$1 ").into_owned();
    }

    formatted = RESERVED_RE
        .replace_all(&formatted, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned();

    for (i, kw) in COMPOUND_KEYWORDS.iter().enumerate() {
        formatted = formatted.replace(&format!("__KW{i}__"), kw);
    }

    formatted = OPEN_SELECT.replace_all(&formatted, "(\n  SELECT").into_owned();
    formatted = CLOSE_PAREN_WORD.replace_all(&formatted, ")\n$1").into_owned();

    let mut depth: usize = 0;
    let lines: Vec<String> = formatted
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with(')') {
                depth = depth.saturating_sub(1);
            }
            let indented = format!("{}{}", "  ".repeat(depth), trimmed);
            if trimmed.contains('(') && !trimmed.contains(')') {
                depth += 1;
            }
            if starts_with_word(trimmed, "AND") || starts_with_word(trimmed, "OR") {
                format!("  {indented}")
            } else {
                indented
            }
        })
        .collect();
    formatted = lines.join("\n");

    formatted = BLANK_RUNS.replace_all(&formatted, "\n\n").into_owned();

    debug!(line_count = formatted.lines().count(), "sql reflow complete");
    Ok(formatted)
}

/// Strip comments and collapse a SQL statement onto one line
///
/// Removes `--` line comments and `/* */` block comments, then collapses
/// whitespace runs and trims. Empty input yields an empty string.
pub fn minify(sql: &str) -> Result<String> {
    if sql.trim().is_empty() {
        return Ok(String::new());
    }
    let mut minified = LINE_COMMENTS.replace_all(sql, "").into_owned();
    minified = BLOCK_COMMENTS.replace_all(&minified, "").into_owned();
    minified = WHITESPACE_RUNS.replace_all(&minified, " ").into_owned();
    Ok(minified.trim().to_string())
}

/// Line starts with `word` followed by a non-identifier character or the end
fn starts_with_word(line: &str, word: &str) -> bool {
    match line.strip_prefix(word) {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |c| !c.is_ascii_alphanumeric() && c != '_'),
        None => false,
    }
}
