//! Error types for the devkit transform core
//!
//! This module provides a single error hierarchy covering every transform in
//! the crate. Each variant corresponds to a specific failure a tool surfaces
//! to its caller; messages are human-readable diagnostics, never panics.

use thiserror::Error;

/// Main error type for the devkit transform core
///
/// This enum contains all possible errors that can occur during transforms,
/// grouped by the stage that produces them: parsing, decoding, conversion,
/// formatting, and the crypto capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DevKitError {
    // Parse errors

    /// Input is not valid JSON; carries the parser's diagnostic verbatim
    #[error("Invalid JSON: {0}")]
    JsonParse(String),

    /// Regular expression failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Unsupported regular expression flag
    #[error("Unsupported flag: {0}")]
    InvalidFlag(char),

    // Decode errors

    /// Malformed Base64 input (non-alphabet characters, bad padding)
    #[error("Invalid Base64: {0}")]
    InvalidBase64(String),

    /// Malformed hexadecimal input
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// JWT segment is not valid base64url or not valid JSON
    #[error("Invalid JWT: {0}")]
    InvalidJwt(String),

    /// Decoded bytes are not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(String),

    // Conversion errors

    /// Timestamp is not a finite number or is outside the representable range
    #[error("Invalid timestamp")]
    InvalidTimestamp,

    /// Date string could not be parsed in any accepted form
    #[error("Invalid date")]
    InvalidDate,

    // Format errors

    /// Reflow could not produce output for this input
    #[error("Format error: {0}")]
    Format(String),

    // Crypto capability errors

    /// The digest primitive is unavailable on this provider
    #[error("Digest unavailable: {0}")]
    DigestUnavailable(String),

    /// The random source is unavailable on this provider
    #[error("Random source unavailable: {0}")]
    RandomUnavailable(String),

    /// Every character category was disabled or excluded away
    #[error("Character set is empty")]
    EmptyCharset,

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using DevKitError
pub type Result<T> = std::result::Result<T, DevKitError>;

impl DevKitError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        DevKitError::Custom(msg.into())
    }

    /// Check if this error came from parsing structured text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DevKitError::JsonParse(_) | DevKitError::InvalidPattern(_) | DevKitError::InvalidFlag(_)
        )
    }

    /// Check if this error came from decoding an encoded payload
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            DevKitError::InvalidBase64(_)
                | DevKitError::InvalidHex(_)
                | DevKitError::InvalidJwt(_)
                | DevKitError::Utf8(_)
        )
    }

    /// Check if this error came from a timestamp/date conversion
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, DevKitError::InvalidTimestamp | DevKitError::InvalidDate)
    }

    /// Check if this error came from a formatting pass
    pub fn is_format_error(&self) -> bool {
        matches!(self, DevKitError::Format(_))
    }

    /// Check if this error came from the digest capability
    pub fn is_hash_error(&self) -> bool {
        matches!(self, DevKitError::DigestUnavailable(_))
    }

    /// Check if this error came from identifier generation
    pub fn is_generation_error(&self) -> bool {
        matches!(self, DevKitError::RandomUnavailable(_) | DevKitError::EmptyCharset)
    }
}

// Implement From traits for easier error conversion
impl From<serde_json::Error> for DevKitError {
    fn from(error: serde_json::Error) -> Self {
        DevKitError::JsonParse(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for DevKitError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        DevKitError::Utf8(error.to_string())
    }
}
