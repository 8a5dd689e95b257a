mod sorted_map;
pub use sorted_map::{test_sorted_map, test_sorted_map_with};
pub use sorted_set::test_sorted_set;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The keys `0..n` in an order shuffled by a seeded generator, so a
/// failing test replays the exact same order.
pub fn shuffled(n: u16, seed: u64) -> Vec<u16> {
    let mut keys: Vec<u16> = (0..n).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

/// One step of a randomized operation stream.
pub enum Op {
    Put(u16),
    Remove(u16),
}

/// A seeded stream of interleaved insertions and removals over a small
/// key range, so streams revisit keys and exercise the update and
/// missing-key paths as well as growth and shrinkage.
pub fn op_stream(len: usize, seed: u64) -> Vec<Op> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let key = rng.gen_range(0..256u16);
            if rng.gen_bool(0.6) {
                Op::Put(key)
            } else {
                Op::Remove(key)
            }
        })
        .collect()
}
