//! SHISHUA CLI
//!
//! Pseudo-random byte generator and self-check driver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate_blocks, generate_words, run_demo, OutputFormat};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "shishua")]
#[command(about = "Fast pseudo-random generator with a 1024-bit state", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 64-byte seed as 128 hex characters (default: operating system entropy)
    #[arg(short, long, global = true, value_name = "HEX")]
    seed: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print hex blocks and check the stream for repeats (default)
    Demo {
        /// Number of 128-byte blocks to print and check
        #[arg(short, long, default_value_t = 100)]
        blocks: usize,

        /// Number of 64-bit words to check after the blocks
        #[arg(short, long, default_value_t = 5000)]
        words: usize,
    },
    /// Write 128-byte blocks to stdout
    Generate {
        /// Number of blocks to write
        #[arg(short, long, default_value_t = 1)]
        blocks: usize,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
        format: OutputFormat,
    },
    /// Print 64-bit words, one per line
    Word {
        /// Number of words to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = cli.seed.as_deref();

    match cli.command {
        None => run_demo(seed, 100, 5000)?,
        Some(Commands::Demo { blocks, words }) => run_demo(seed, blocks, words)?,
        Some(Commands::Generate { blocks, format }) => generate_blocks(seed, blocks, format)?,
        Some(Commands::Word { count }) => generate_words(seed, count)?,
    }

    Ok(())
}
