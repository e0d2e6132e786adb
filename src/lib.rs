//! DevKit transform core
//!
//! The shared transform engine behind a developer-utilities workbench. Every
//! tool surface (JSON prettifier, SQL reflow, text diff, encoders, password
//! generator, and friends) calls into this crate, which keeps the transforms
//! pure, deterministic, and testable behind a capability seam for anything
//! that needs entropy or a digest.
//!
//! # Features
//!
//! - **Structured text**: JSON prettification and SQL reflow with keyword
//!   normalization and parenthesis-depth indentation
//! - **Text comparison**: line-by-line diff with stats and a unified render
//! - **Encodings**: Base64, hex, JWT decoding, and URI component pairs
//! - **Identifiers**: UUIDv4 and password generation with strength scoring
//! - **Time**: epoch timestamp and ISO-8601 conversion in both directions
//! - **Patterns**: regex evaluation with capture groups and match highlighting
//! - **Digests**: SHA-256 and HMAC-SHA256 behind a pluggable [`CryptoProvider`]
//!
//! # Quick Start
//!
//! ```rust
//! use devkit_core::crypto::signer::sha256_hex;
//! use devkit_core::{sql, SystemCrypto};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let formatted = sql::format("select id from users where active = 1")?;
//!     assert!(formatted.starts_with("SELECT id"));
//!
//!     let digest = sha256_hex(&SystemCrypto, "hello").await?;
//!     assert_eq!(digest.len(), 64);
//!
//!     Ok(())
//! }
//! ```

/// Crate version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod crypto;
pub mod error;

// Structured-text transforms
pub mod case;
pub mod json;
pub mod sql;

// Comparison and pattern tools
pub mod diff;
pub mod pattern;

// Encoding and time conversion
pub mod datetime;
pub mod encoding;

// Identifier generation
pub mod random;

// Re-exports for convenience
pub use case::{to_camel_case, to_kebab_case, to_snake_case, to_title_case};
pub use crypto::signer::{hmac_sha256_sign, hmac_sha256_verify, sha256_hex};
pub use crypto::{CryptoProvider, SeededCrypto, SystemCrypto};
pub use datetime::{iso_to_timestamp, now_millis, timestamp_to_iso};
pub use diff::{DiffLine, DiffLineKind, DiffOptions, DiffStats};
pub use encoding::DecodedJwt;
pub use error::{DevKitError, Result};
pub use pattern::{test_pattern, CaptureGroup, PatternMatch, PatternReport};
pub use random::{
    generate_password, generate_uuid, password_strength, PasswordHistory, PasswordOptions,
    PasswordStrength, StrengthLabel,
};
