#![no_main]

use libfuzzer_sys::fuzz_target;
use shishua::{Shishua, BLOCK_SIZE, SEED_SIZE};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Seed byte from the first byte, buffer length from the next two
    let mut rng = Shishua::from_seed_bytes(&[data[0]; SEED_SIZE]);
    let len = usize::from(u16::from_le_bytes([data[1], data[2]])) % (16 * BLOCK_SIZE);

    let mut reference = rng.clone();
    let mut buf = vec![0u8; len];

    match rng.fill_bytes(&mut buf) {
        Ok(n) => {
            assert_eq!(len % BLOCK_SIZE, 0, "Partial block accepted");
            assert_eq!(n, len);
            for chunk in buf.chunks_exact(8) {
                assert_eq!(chunk, &reference.next_u64().to_le_bytes());
            }
        }
        Err(_) => {
            assert_ne!(len % BLOCK_SIZE, 0, "Whole-block fill rejected");
            assert_eq!(rng.state(), reference.state(), "Rejected fill advanced");
        }
    }
});
