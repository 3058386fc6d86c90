//! # `PractRand` Stream Generator
//!
//! High-performance stream generator for `PractRand` testing.
//!
//! This binary writes the raw SHISHUA byte stream to stdout until the reader
//! closes the pipe:
//!
//! ```text
//! shishua_stream | RNG_test stdin64
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use shishua::{FixedEntropy, Shishua, BLOCK_SIZE, SEED_SIZE};
use std::io::{self, ErrorKind, Write};

/// Blocks generated per write (64 KiB).
const BLOCKS_PER_WRITE: usize = 512;

#[derive(Parser)]
#[command(name = "shishua_stream")]
#[command(about = "Endless SHISHUA output for statistical test batteries", long_about = None)]
struct Args {
    /// 64-byte seed as 128 hex characters (default: operating system entropy)
    #[arg(short, long, value_name = "HEX")]
    seed: Option<String>,

    /// Stop after this many bytes (rounded up to whole blocks)
    #[arg(short, long)]
    limit: Option<u64>,
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed.as_deref() {
        Some(hex_seed) => {
            let bytes = hex::decode(hex_seed.trim()).context("Seed is not valid hex")?;
            if bytes.len() != SEED_SIZE {
                bail!("Seed must be {SEED_SIZE} bytes, got {}", bytes.len());
            }
            Shishua::from_entropy_source(&mut FixedEntropy::new(&bytes))?
        }
        None => Shishua::new()?,
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut buf = vec![0u8; BLOCKS_PER_WRITE * BLOCK_SIZE];
    let mut written: u64 = 0;

    loop {
        let len = match args.limit {
            Some(limit) if written >= limit => break,
            Some(limit) => {
                let blocks = (limit - written).div_ceil(BLOCK_SIZE as u64);
                usize::try_from(blocks).map_or(buf.len(), |b| buf.len().min(b.saturating_mul(BLOCK_SIZE)))
            }
            None => buf.len(),
        };
        let chunk = &mut buf[..len];

        rng.fill_bytes(chunk)?;

        match handle.write_all(chunk) {
            Ok(()) => written += len as u64,
            // Downstream test battery finished reading
            Err(e) if e.kind() == ErrorKind::BrokenPipe => break,
            Err(e) => return Err(e.into()),
        }
    }

    log::info!("wrote {written} bytes");
    Ok(())
}
