//! tests/common.rs
//! Common constants and utilities shared across test files

use serde::Deserialize;

/// Standard key used across tests that do not care about the key itself
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY: &str = "lemon";

/// Plaintext/ciphertext pair for [`TEST_KEY`]
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXT: &str = "attackatdawn";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_CIPHERTEXT: &str = "lxfopvefrnhr";

/// Messages with no letters at all
#[allow(dead_code)] // Used across multiple test files
pub const NON_LETTER_MESSAGES: &[&str] = &["", "123 !@# $%^", "\n\t ", "2025-10-16", "(){}[]<>"];

/// Keys that must be rejected under the default policy
#[allow(dead_code)] // Used across multiple test files
pub const BAD_KEYS: &[&str] = &["", "lem on", "key1", "ké", "!!!", "-"];

/// One row of `tests/test_data/vigenere_vectors.json`
#[allow(dead_code)] // Used across multiple test files
#[derive(Debug, Deserialize)]
pub struct Vector {
    pub plaintext: String,
    pub key: String,
    pub ciphertext: String,
    pub note: String,
}

/// Load the shared test vectors
#[allow(dead_code)] // Used across multiple test files
pub fn load_vectors() -> Vec<Vector> {
    let filename = "vigenere_vectors.json";
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join(filename);

    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}
