//! Benchmark workloads for the dynarr containers.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`insert_positions`]: seeded insertion indices valid for a growing array
//! - [`erase_positions`]: seeded removal indices valid for a shrinking array
//! - [`filled`]: an array of `len` sequential values with exact capacity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr_array::DynamicArray;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Element counts used by the size-parameterised benches.
pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Generate `n` insertion indices for an array that starts empty.
///
/// The `i`-th index is in `[0, i]`, so replaying them in order against an
/// array that gains one element per step is always in bounds.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| (rng.next_u64() % (i as u64 + 1)) as usize)
        .collect()
}

/// Generate `n` removal indices for an array that starts with `n` elements.
///
/// The `i`-th index is below `n - i`.
pub fn erase_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| (rng.next_u64() % (n - i) as u64) as usize)
        .collect()
}

/// An array holding `0..len` with capacity equal to `len`.
pub fn filled(len: usize) -> DynamicArray<u64> {
    (0..len as u64).collect()
}
