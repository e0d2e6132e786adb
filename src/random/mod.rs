//! Random identifier generation
//!
//! UUIDs, passwords, and password strength scoring. Every random draw goes
//! through a [`CryptoProvider`], so a seeded provider replays identifiers
//! byte for byte in tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::crypto::CryptoProvider;
use crate::error::{DevKitError, Result};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that read alike in most fonts
const SIMILAR_CHARS: &str = "il1Lo0O";

/// Generate a random version-4 UUID in lowercase hyphenated form
///
/// Sixteen provider bytes are stamped with the version and variant bits, so
/// a seeded provider yields a reproducible identifier.
///
/// # Example
///
/// ```rust
/// use devkit_core::random::generate_uuid;
/// use devkit_core::crypto::SeededCrypto;
///
/// let id = generate_uuid(&SeededCrypto::from_seed(1)).unwrap();
/// assert_eq!(id.len(), 36);
/// assert_eq!(&id[14..15], "4");
/// ```
pub fn generate_uuid(provider: &dyn CryptoProvider) -> Result<String> {
    let mut bytes = [0u8; 16];
    provider.random_bytes(&mut bytes)?;
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    Ok(uuid.to_string())
}

/// Password generation settings
///
/// Chained builder in the options style used across the crate:
///
/// ```rust
/// use devkit_core::random::PasswordOptions;
///
/// let options = PasswordOptions::new()
///     .with_length(24)
///     .with_symbols(false)
///     .with_exclude_similar(true);
/// assert_eq!(options.length, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_similar: bool,
    pub include_custom: String,
    pub exclude_custom: String,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
            include_custom: String::new(),
            exclude_custom: String::new(),
        }
    }
}

impl PasswordOptions {
    /// Create options with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Toggle the lowercase category
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    /// Toggle the uppercase category
    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.uppercase = enabled;
        self
    }

    /// Toggle the digit category
    pub fn with_digits(mut self, enabled: bool) -> Self {
        self.digits = enabled;
        self
    }

    /// Toggle the symbol category
    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.symbols = enabled;
        self
    }

    /// Drop look-alike characters (`il1Lo0O`) from the pool
    pub fn with_exclude_similar(mut self, enabled: bool) -> Self {
        self.exclude_similar = enabled;
        self
    }

    /// Add extra characters to the pool
    pub fn with_include_custom<S: Into<String>>(mut self, chars: S) -> Self {
        self.include_custom = chars.into();
        self
    }

    /// Remove specific characters from the pool
    pub fn with_exclude_custom<S: Into<String>>(mut self, chars: S) -> Self {
        self.exclude_custom = chars.into();
        self
    }
}

/// Bounded most-recent-first password history
///
/// Recording an existing entry moves it to the front instead of duplicating
/// it; the list never grows past [`Self::CAPACITY`] entries. Callers own the
/// value; nothing is stored module-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordHistory {
    entries: Vec<String>,
}

impl PasswordHistory {
    /// Most entries the history retains
    pub const CAPACITY: usize = 5;

    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a password at the front, deduplicated and capped
    pub fn record(&mut self, password: &str) {
        self.entries.retain(|entry| entry != password);
        self.entries.insert(0, password.to_string());
        self.entries.truncate(Self::CAPACITY);
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generate a password from the configured character pool
///
/// The pool is the enabled category alphabets concatenated in a fixed order
/// (lowercase, uppercase, digits, symbols) plus any custom characters, minus
/// the look-alike set and custom exclusions. Each position is an independent
/// provider draw indexed by modulo. Afterwards one character from each
/// enabled category, drawn from that category's full alphabet, is placed at
/// a distinct random position so every enabled category appears at least
/// once (capped at the password length). The result is recorded in
/// `history`.
///
/// Fails with [`DevKitError::EmptyCharset`] when every character has been
/// toggled or excluded away.
pub fn generate_password(
    provider: &dyn CryptoProvider,
    options: &PasswordOptions,
    history: &mut PasswordHistory,
) -> Result<String> {
    let mut charset = String::new();
    if options.lowercase {
        charset.push_str(LOWERCASE);
    }
    if options.uppercase {
        charset.push_str(UPPERCASE);
    }
    if options.digits {
        charset.push_str(DIGITS);
    }
    if options.symbols {
        charset.push_str(SYMBOLS);
    }
    charset.push_str(&options.include_custom);

    if options.exclude_similar {
        charset.retain(|c| !SIMILAR_CHARS.contains(c));
    }
    if !options.exclude_custom.is_empty() {
        charset.retain(|c| !options.exclude_custom.contains(c));
    }

    let pool: Vec<char> = charset.chars().collect();
    if pool.is_empty() {
        return Err(DevKitError::EmptyCharset);
    }
    debug!(
        pool_size = pool.len(),
        length = options.length,
        "assembled password pool"
    );

    let mut chars: Vec<char> = Vec::with_capacity(options.length);
    for _ in 0..options.length {
        let draw = random_u32(provider)? as usize;
        chars.push(pool[draw % pool.len()]);
    }

    // One character per enabled category, from the full category alphabet
    let mut required: Vec<char> = Vec::new();
    if options.lowercase {
        required.push(random_char(provider, LOWERCASE)?);
    }
    if options.uppercase {
        required.push(random_char(provider, UPPERCASE)?);
    }
    if options.digits {
        required.push(random_char(provider, DIGITS)?);
    }
    if options.symbols {
        required.push(random_char(provider, SYMBOLS)?);
    }

    if !chars.is_empty() && !required.is_empty() {
        let count = required.len().min(chars.len());
        let positions = distinct_positions(provider, chars.len(), count)?;
        for (ch, pos) in required.iter().take(count).zip(positions) {
            chars[pos] = *ch;
        }
    }

    let password: String = chars.into_iter().collect();
    history.record(&password);
    Ok(password)
}

/// Strength bands reported alongside the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Human-readable label text
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additive strength score with its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a password on a 0-100 additive scale
///
/// Length at 12 and 16 characters, presence of each character class, and
/// the absence of any character repeated three or more times in a row each
/// contribute a fixed number of points. Bands: below 30 Very Weak, below 50
/// Weak, below 70 Fair, below 90 Strong, otherwise Very Strong.
pub fn password_strength(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let mut score: u8 = 0;
    if length >= 12 {
        score += 20;
    }
    if length >= 16 {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 20;
    }
    if !has_triple_repeat(password) {
        score += 5;
    }

    let label = match score {
        0..=29 => StrengthLabel::VeryWeak,
        30..=49 => StrengthLabel::Weak,
        50..=69 => StrengthLabel::Fair,
        70..=89 => StrengthLabel::Strong,
        _ => StrengthLabel::VeryStrong,
    };
    PasswordStrength { score, label }
}

fn has_triple_repeat(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn random_u32(provider: &dyn CryptoProvider) -> Result<u32> {
    let mut buf = [0u8; 4];
    provider.random_bytes(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn random_char(provider: &dyn CryptoProvider, alphabet: &str) -> Result<char> {
    let chars: Vec<char> = alphabet.chars().collect();
    let draw = random_u32(provider)? as usize;
    Ok(chars[draw % chars.len()])
}

/// Choose `count` distinct indexes below `len` by partial shuffle
fn distinct_positions(
    provider: &dyn CryptoProvider,
    len: usize,
    count: usize,
) -> Result<Vec<usize>> {
    let mut indexes: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let draw = random_u32(provider)? as usize;
        let j = i + draw % (len - i);
        indexes.swap(i, j);
    }
    indexes.truncate(count);
    Ok(indexes)
}
