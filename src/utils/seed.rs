use rand::{rngs::StdRng, SeedableRng};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stable 64-bit hash (FNV-1a) of a room seed string
pub fn seed_hash(seed: &str) -> u64 {
    seed.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Random source shared by every player of a room: the same seed string
/// always yields the same sequence, so each client rebuilds the same grid.
pub fn rng_from_seed(seed: &str) -> StdRng {
    StdRng::seed_from_u64(seed_hash(seed))
}
