//! CLI Commands
//!
//! All shishua CLI commands organized as separate modules.

mod demo;
mod generate;

use anyhow::{bail, Context, Result};
use shishua::{FixedEntropy, Shishua, SEED_SIZE};

pub use demo::run_demo;
pub use generate::{generate_blocks, generate_words, OutputFormat};

/// Build a generator from a hex seed, or from the operating system if none.
pub fn build_rng(seed: Option<&str>) -> Result<Shishua> {
    let Some(hex_seed) = seed else {
        log::debug!("seeding from operating system entropy");
        return Shishua::new().context("Failed to seed from operating system");
    };

    let bytes = hex::decode(hex_seed.trim()).context("Seed is not valid hex")?;
    if bytes.len() != SEED_SIZE {
        bail!(
            "Seed must be {} bytes ({} hex characters), got {} bytes",
            SEED_SIZE,
            SEED_SIZE * 2,
            bytes.len()
        );
    }

    log::debug!("seeding from command-line seed");
    Shishua::from_entropy_source(&mut FixedEntropy::new(&bytes)).context("Failed to seed")
}
