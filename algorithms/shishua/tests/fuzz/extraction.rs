use bolero::check;
use shishua::{Shishua, ShishuaError, BLOCK_SIZE, SEED_SIZE};

#[test]
fn fuzz_fill_length_contract() {
    check!().with_type::<(u8, u16)>().for_each(|(seed_byte, len)| {
        let len = usize::from(*len) % (8 * BLOCK_SIZE + 1);
        let mut rng = Shishua::from_seed_bytes(&[*seed_byte; SEED_SIZE]);
        let mut reference = rng.clone();

        let mut buf = vec![0u8; len];
        let res = rng.fill_bytes(&mut buf);

        if len % BLOCK_SIZE == 0 {
            // =================================================================
            // WHOLE BLOCKS: exact length, same bytes as single-value extraction
            // =================================================================
            assert_eq!(res, Ok(len), "Whole-block fill must write everything");
            for chunk in buf.chunks_exact(8) {
                assert_eq!(chunk, &reference.next_u64().to_le_bytes());
            }
        } else {
            // =================================================================
            // PARTIAL BLOCKS: rejected, untouched, generator not advanced
            // =================================================================
            assert_eq!(res, Err(ShishuaError::InvalidBufferLength { len }));
            assert!(buf.iter().all(|&b| b == 0), "Rejected fill wrote bytes");
            assert_eq!(rng.state(), reference.state(), "Rejected fill advanced");
        }
    });
}
