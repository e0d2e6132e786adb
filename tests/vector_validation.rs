//! Cross-frontend transform vector validation
//!
//! Validates the canonical transform vectors against the crate. The same
//! fixture is consumed by every frontend that embeds the transform core, so
//! a mismatch here means an output users see has drifted.
//!
//! Run: cargo test --test vector_validation

use serde::Deserialize;

use devkit_core::crypto::signer::{hmac_sha256_sign, hmac_sha256_verify, sha256_hex};
use devkit_core::diff::{self, DiffLineKind, DiffOptions};
use devkit_core::{case, datetime, encoding, pattern, random, sql, SystemCrypto};

// ── JSON structures matching transform_vectors.json ─────────────────────

#[derive(Deserialize)]
struct TransformVectors {
    vectors: Vectors,
}

#[derive(Deserialize)]
struct Vectors {
    case_conversion: Section<CaseTest>,
    sql_reflow: Section<SqlTest>,
    sql_minify: Section<SqlTest>,
    text_diff: Section<TextDiffTest>,
    base64_transport: Section<Base64Test>,
    hex_transport: Section<HexTest>,
    jwt_decoding: Section<JwtTest>,
    datetime_conversion: Section<DatetimeTest>,
    sha256_digests: Section<Sha256Test>,
    hmac_signatures: Section<HmacTest>,
    password_strength: Section<StrengthTest>,
    pattern_matching: Section<PatternTest>,
}

#[derive(Deserialize)]
struct Section<T> {
    tests: Vec<T>,
}

#[derive(Deserialize)]
struct CaseTest {
    name: String,
    input: String,
    camel: String,
    snake: String,
    kebab: String,
    title: String,
}

#[derive(Deserialize)]
struct SqlTest {
    name: String,
    input: String,
    expected: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextDiffTest {
    name: String,
    left: String,
    right: String,
    #[serde(default)]
    ignore_case: bool,
    #[serde(default)]
    ignore_whitespace: bool,
    expected_kinds: Vec<DiffLineKind>,
    added: usize,
    removed: usize,
    unchanged: usize,
}

#[derive(Deserialize)]
struct Base64Test {
    name: String,
    plain: String,
    encoded: String,
}

#[derive(Deserialize)]
struct HexTest {
    name: String,
    text: String,
    hex: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JwtTest {
    name: String,
    token: String,
    alg: String,
    typ: String,
    sub: String,
    payload_name: String,
    iat: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum Direction {
    ToIso,
    ToTimestamp,
}

#[derive(Deserialize)]
struct DatetimeTest {
    name: String,
    direction: Direction,
    input: String,
    expected: String,
}

#[derive(Deserialize)]
struct Sha256Test {
    name: String,
    input: String,
    digest: String,
}

#[derive(Deserialize)]
struct HmacTest {
    name: String,
    key: String,
    message: String,
    signature: String,
}

#[derive(Deserialize)]
struct StrengthTest {
    name: String,
    password: String,
    score: u8,
    label: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatternTest {
    name: String,
    pattern: String,
    flags: String,
    input: String,
    match_count: usize,
    highlighted: String,
}

// ── Load canonical vectors ──────────────────────────────────────────────

const TRANSFORM_VECTORS_JSON: &str = include_str!("fixtures/transform_vectors.json");

fn load_vectors() -> TransformVectors {
    // RUST_LOG=devkit_core=debug surfaces the transform traces during a run
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    serde_json::from_str(TRANSFORM_VECTORS_JSON)
        .expect("Failed to parse transform_vectors.json")
}

// ── Tests ───────────────────────────────────────────────────────────────

#[test]
fn test_case_conversion_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.case_conversion.tests {
        assert_eq!(case::to_camel_case(&test.input), test.camel,
            "camelCase mismatch for '{}'", test.name);
        assert_eq!(case::to_snake_case(&test.input), test.snake,
            "snake_case mismatch for '{}'", test.name);
        assert_eq!(case::to_kebab_case(&test.input), test.kebab,
            "kebab-case mismatch for '{}'", test.name);
        assert_eq!(case::to_title_case(&test.input), test.title,
            "Title Case mismatch for '{}'", test.name);
    }
}

#[test]
fn test_sql_reflow_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.sql_reflow.tests {
        let formatted = sql::format(&test.input).unwrap();
        assert_eq!(formatted, test.expected,
            "Reflow mismatch for '{}'", test.name);

        // Reflow is stable: formatting its own output changes nothing
        assert_eq!(sql::format(&formatted).unwrap(), test.expected,
            "Reflow not stable for '{}'", test.name);
    }
}

#[test]
fn test_sql_minify_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.sql_minify.tests {
        let minified = sql::minify(&test.input).unwrap();
        assert_eq!(minified, test.expected,
            "Minify mismatch for '{}'", test.name);
    }
}

#[test]
fn test_text_diff_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.text_diff.tests {
        let options = DiffOptions::new()
            .with_ignore_case(test.ignore_case)
            .with_ignore_whitespace(test.ignore_whitespace);
        let rows = diff::diff(&test.left, &test.right, &options);

        let kinds: Vec<DiffLineKind> = rows.iter().map(|row| row.kind).collect();
        assert_eq!(kinds, test.expected_kinds,
            "Row kinds mismatch for '{}'", test.name);

        let stats = diff::stats(&rows);
        assert_eq!(stats.added, test.added,
            "Added count mismatch for '{}'", test.name);
        assert_eq!(stats.removed, test.removed,
            "Removed count mismatch for '{}'", test.name);
        assert_eq!(stats.unchanged, test.unchanged,
            "Unchanged count mismatch for '{}'", test.name);
    }
}

#[test]
fn test_base64_transport_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.base64_transport.tests {
        assert_eq!(encoding::base64_encode(&test.plain), test.encoded,
            "Encode mismatch for '{}'", test.name);
        assert_eq!(encoding::base64_decode(&test.encoded).unwrap(), test.plain,
            "Decode mismatch for '{}'", test.name);
    }
}

#[test]
fn test_hex_transport_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.hex_transport.tests {
        assert_eq!(encoding::encode_hex(test.text.as_bytes()), test.hex,
            "Hex encode mismatch for '{}'", test.name);
        assert_eq!(encoding::decode_hex(&test.hex).unwrap(), test.text.as_bytes(),
            "Hex decode mismatch for '{}'", test.name);
    }
}

#[test]
fn test_jwt_decoding_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.jwt_decoding.tests {
        let decoded = encoding::decode_jwt(&test.token).unwrap();
        assert_eq!(decoded.header["alg"], test.alg.as_str(),
            "Header alg mismatch for '{}'", test.name);
        assert_eq!(decoded.header["typ"], test.typ.as_str(),
            "Header typ mismatch for '{}'", test.name);
        assert_eq!(decoded.payload["sub"], test.sub.as_str(),
            "Payload sub mismatch for '{}'", test.name);
        assert_eq!(decoded.payload["name"], test.payload_name.as_str(),
            "Payload name mismatch for '{}'", test.name);
        assert_eq!(decoded.payload["iat"], test.iat,
            "Payload iat mismatch for '{}'", test.name);
    }
}

#[test]
fn test_datetime_conversion_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.datetime_conversion.tests {
        let converted = match test.direction {
            Direction::ToIso => datetime::timestamp_to_iso(&test.input),
            Direction::ToTimestamp => datetime::iso_to_timestamp(&test.input),
        };
        assert_eq!(converted.unwrap(), test.expected,
            "Conversion mismatch for '{}'", test.name);
    }
}

#[tokio::test]
async fn test_sha256_digest_vectors() {
    let vectors = load_vectors();
    let provider = SystemCrypto;

    for test in &vectors.vectors.sha256_digests.tests {
        let digest = sha256_hex(&provider, &test.input).await.unwrap();
        assert_eq!(digest, test.digest,
            "SHA-256 mismatch for '{}'", test.name);
    }
}

#[tokio::test]
async fn test_hmac_signature_vectors() {
    let vectors = load_vectors();
    let provider = SystemCrypto;

    for test in &vectors.vectors.hmac_signatures.tests {
        let signature = hmac_sha256_sign(&provider, &test.message, &test.key)
            .await
            .unwrap();
        assert_eq!(signature, test.signature,
            "HMAC mismatch for '{}'", test.name);

        // Verification accepts the canonical signature and its uppercase form
        let verified = hmac_sha256_verify(&provider, &test.message, &test.key, &signature)
            .await
            .unwrap();
        assert!(verified, "Verification failed for '{}'", test.name);

        let upper = signature.to_uppercase();
        let verified = hmac_sha256_verify(&provider, &test.message, &test.key, &upper)
            .await
            .unwrap();
        assert!(verified, "Uppercase verification failed for '{}'", test.name);

        let tampered = format!("{} extra", test.message);
        let verified = hmac_sha256_verify(&provider, &tampered, &test.key, &signature)
            .await
            .unwrap();
        assert!(!verified, "Tampered message must not verify for '{}'", test.name);
    }
}

#[test]
fn test_password_strength_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.password_strength.tests {
        let strength = random::password_strength(&test.password);
        assert_eq!(strength.score, test.score,
            "Score mismatch for '{}': expected {}, got {}",
            test.name, test.score, strength.score);
        assert_eq!(strength.label.as_str(), test.label,
            "Label mismatch for '{}'", test.name);
    }
}

#[test]
fn test_pattern_matching_vectors() {
    let vectors = load_vectors();

    for test in &vectors.vectors.pattern_matching.tests {
        let report = pattern::test_pattern(&test.pattern, &test.flags, &test.input).unwrap();
        assert_eq!(report.matches.len(), test.match_count,
            "Match count mismatch for '{}'", test.name);
        assert_eq!(report.highlighted, test.highlighted,
            "Highlight mismatch for '{}'", test.name);
    }
}
