//! Demo Command
//!
//! Print hex-encoded blocks and verify that nothing repeats.

use super::build_rng;
use anyhow::{bail, Result};
use shishua::BLOCK_SIZE;
use std::collections::HashSet;
use std::io::{self, BufWriter, Write};

// =============================================================================
// DEMO
// =============================================================================

/// Print `blocks` hex blocks, then draw `words` 64-bit values, failing on any
/// repeated block or word.
pub fn run_demo(seed: Option<&str>, blocks: usize, words: usize) -> Result<()> {
    let mut rng = build_rng(seed)?;
    let mut seen: HashSet<String> = HashSet::with_capacity(blocks + words);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut buf = [0u8; BLOCK_SIZE];

    for i in 0..blocks {
        let n = rng.fill_bytes(&mut buf)?;
        if n != buf.len() {
            bail!("Short fill at block {i}: {n} of {} bytes", buf.len());
        }

        let line = hex::encode(buf);
        if !seen.insert(line.clone()) {
            bail!("Duplicate block at index {i}");
        }
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    for i in 0..words {
        let word = format!("{:x}", rng.next_u64());
        if !seen.insert(word) {
            bail!("Duplicate word at index {i}");
        }
    }

    log::info!("{blocks} blocks and {words} words checked, no repeats");
    Ok(())
}
