use bolero::check;
use shishua::{FixedEntropy, Shishua, ShishuaError, SEED_SIZE};

#[test]
fn fuzz_seeding_paths_agree() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // SHORT ENTROPY
        // =============================================================================
        if data.len() < SEED_SIZE {
            let res = Shishua::from_entropy_source(&mut FixedEntropy::new(data));
            assert_eq!(
                res.err(),
                Some(ShishuaError::ShortEntropy {
                    requested: SEED_SIZE,
                    supplied: data.len()
                }),
                "Short entropy must be rejected"
            );
            return;
        }

        // =============================================================================
        // FULL ENTROPY
        // =============================================================================
        let mut seed = [0u8; SEED_SIZE];
        seed.copy_from_slice(&data[..SEED_SIZE]);

        let mut via_source = match Shishua::from_entropy_source(&mut FixedEntropy::new(data)) {
            Ok(rng) => rng,
            Err(e) => panic!("Full entropy rejected: {e}"),
        };
        let mut via_bytes = Shishua::from_seed_bytes(&seed);

        assert_eq!(via_source.state(), via_bytes.state(), "Seeding paths differ");
        assert_eq!(via_source.next_u64(), via_bytes.next_u64());
    });
}
