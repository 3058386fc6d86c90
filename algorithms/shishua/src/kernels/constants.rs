//! SHISHUA Kernel Constants
//!
//! The initial state is the hexadecimal expansion of the Golden Ratio (φ),
//! cut into sixteen consecutive 64-bit words:
//!
//! ```text
//! PHI[0] || PHI[1] || ... || PHI[15] = frac(φ) * 2^1024
//! ```
//!
//! This keeps the table "nothing up my sleeve": every word is reproducible
//! from a well-known irrational number.

// =============================================================================
// STATE GEOMETRY
// =============================================================================

/// Words in the working state (1024 bits).
pub const STATE_WORDS: usize = 16;

/// Words in the output block produced by one diffusion step (1024 bits).
pub const OUTPUT_WORDS: usize = 16;

/// Words in the step counter (256 bits).
pub const COUNTER_WORDS: usize = 4;

/// Words per lane. The state is two independent lanes of 8 words.
pub const LANE_WORDS: usize = 8;

/// Words per lane half. Low half `L[0..4]`, high half `H[0..4]`.
pub const HALF_LANE: usize = 4;

/// Number of lanes in the state.
pub const NUM_LANES: usize = STATE_WORDS / LANE_WORDS;

// =============================================================================
// DIFFUSION
// =============================================================================

/// Cross-word permutation of the 32-bit shuffle.
///
/// Entry `k` (k < 8) selects the word whose upper half lands in the low half
/// of temporary `k`; entry `k + 8` selects the word whose lower half lands in
/// the upper half.
pub const SHUFFLE_OFFSETS: [usize; 16] = [2, 3, 0, 1, 5, 6, 7, 4, 3, 0, 1, 2, 6, 7, 4, 5];

/// Per-step counter increments: decreasing odd numbers.
pub const COUNTER_INCREMENTS: [u64; COUNTER_WORDS] = [7, 5, 3, 1];

/// Right shift applied to the low half of a lane before mixing.
pub const LOW_SHIFT: u32 = 1;

/// Right shift applied to the high half of a lane before mixing.
pub const HIGH_SHIFT: u32 = 3;

// =============================================================================
// SEEDING
// =============================================================================

/// Diffusion steps run at construction before any output is trusted.
pub const WARMUP_ROUNDS: usize = 13;

/// Bytes requested from the entropy source.
pub const SEED_SIZE: usize = 64;

/// Seed words derived from the entropy buffer.
pub const SEED_WORDS: usize = 4;

/// Distance in bytes between consecutive seed words in the entropy buffer.
///
/// Only the first four bytes of each stride are read (little-endian `u32`).
pub const SEED_STRIDE: usize = 8;

// =============================================================================
// EXTRACTION
// =============================================================================

/// Output block size in bytes. Bulk fills work in whole blocks.
pub const BLOCK_SIZE: usize = 128;

/// Bytes per extracted word.
pub const WORD_SIZE: usize = 8;

/// Words extracted per block.
pub const WORDS_PER_BLOCK: usize = BLOCK_SIZE / WORD_SIZE;

// =============================================================================
// INITIAL STATE
// =============================================================================

/// Golden Ratio (φ) expansion used as the initial state.
pub const PHI: [u64; STATE_WORDS] = [
    0x9E37_79B9_7F4A_7C15,
    0xF39C_C060_5CED_C834,
    0x1082_276B_F3A2_7251,
    0xF86C_6A11_D0C1_8E95,
    0x2767_F0B1_53D2_7B7F,
    0x0347_045B_5BF1_827F,
    0x0188_6F09_2840_3002,
    0xC1D6_4BA4_0F33_5E36,
    0xF06A_D7AE_9717_877E,
    0x8583_9D6E_FFBD_7DC6,
    0x64D3_25D1_C537_1682,
    0xCADD_0CCC_FDFF_BBE1,
    0x626E_33B8_D04B_4331,
    0xBBF7_3C79_0D94_F79D,
    0x471C_4AB3_ED3D_82A5,
    0xFEC5_0770_5E4A_E6E5,
];
