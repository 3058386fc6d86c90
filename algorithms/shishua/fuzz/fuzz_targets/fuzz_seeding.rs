#![no_main]

use libfuzzer_sys::fuzz_target;
use shishua::{FixedEntropy, Shishua, SEED_SIZE};

fuzz_target!(|data: &[u8]| {
    let res = Shishua::from_entropy_source(&mut FixedEntropy::new(data));

    // Anything shorter than a full seed must be refused
    if data.len() < SEED_SIZE {
        assert!(res.is_err(), "Short entropy accepted");
        return;
    }

    let mut from_source = res.unwrap();
    let mut from_bytes = Shishua::from_seed_bytes(data[..SEED_SIZE].try_into().unwrap());

    // Both construction paths must produce the same stream
    for _ in 0..16 {
        assert_eq!(
            from_source.next_u64(),
            from_bytes.next_u64(),
            "Seeding paths differ!"
        );
    }
});
