//! Generate Command
//!
//! Raw or hex output of blocks and words.

use super::build_rng;
use anyhow::Result;
use clap::ValueEnum;
use std::io::{self, BufWriter, Write};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    /// One lowercase hex line per block
    Hex,
    /// Raw bytes, no separators
    Raw,
}

/// Write `blocks` 128-byte blocks to stdout.
pub fn generate_blocks(seed: Option<&str>, blocks: usize, format: OutputFormat) -> Result<()> {
    let mut rng = build_rng(seed)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..blocks {
        let block = rng.next_block();
        match format {
            OutputFormat::Hex => writeln!(out, "{}", hex::encode(block))?,
            OutputFormat::Raw => out.write_all(&block)?,
        }
    }

    out.flush()?;
    Ok(())
}

/// Print `count` 64-bit words as zero-padded hex, one per line.
pub fn generate_words(seed: Option<&str>, count: usize) -> Result<()> {
    let mut rng = build_rng(seed)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..count {
        writeln!(out, "{:016x}", rng.next_u64())?;
    }

    out.flush()?;
    Ok(())
}
