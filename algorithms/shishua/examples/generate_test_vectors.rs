//! Generator for SHISHUA test vectors
//!
//! Generates the canonical JSON test vectors used by `tests/test_vectors.json`.
//! Each vector names a 64-byte entropy buffer and records the first four
//! words and the first two 128-byte blocks of the resulting stream.
#![allow(clippy::unwrap_used)]
use serde_json::json;
use shishua::{Shishua, BLOCK_SIZE, SEED_SIZE};

fn vector(name: &str, label: &str, entropy: &[u8; SEED_SIZE]) -> serde_json::Value {
    let mut rng = Shishua::from_seed_bytes(entropy);
    let words: Vec<String> = (0..4).map(|_| format!("{:016x}", rng.next_u64())).collect();

    let mut rng = Shishua::from_seed_bytes(entropy);
    let mut blocks = [0u8; 2 * BLOCK_SIZE];
    rng.fill_bytes(&mut blocks).unwrap();

    json!({
        "name": name,
        "entropy": label,
        "first_u64": words,
        "first_blocks": hex::encode(blocks)
    })
}

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. DEGENERATE ENTROPY
    // =========================================================================

    // All-zero entropy: state is the bare constants table before warm-up
    vectors.push(vector("zero_entropy", "ZERO_64", &[0x00; SEED_SIZE]));

    // All-ones entropy: every seed word is 0xFFFF_FFFF
    vectors.push(vector("ones_entropy", "FF_64", &[0xFF; SEED_SIZE]));

    // =========================================================================
    // 2. STRUCTURED ENTROPY
    // =========================================================================

    // Sequential bytes 0..64: distinct seed words, exercises the ignored bytes
    let mut seq = [0u8; SEED_SIZE];
    for (i, b) in seq.iter_mut().enumerate() {
        *b = i as u8;
    }
    vectors.push(vector("sequential_entropy", "SEQ_64", &seq));

    // ASCII text
    let ascii = b"SHISHUA: Small Hazardous Input-Sized Hardware-Unaware Algorithm!";
    vectors.push(vector("ascii_entropy", "ASCII_64", ascii));

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
