//! # Shuffle
//!
//! Uniform random permutations for answer options and replay ordering.
//! Both functions copy their input; the caller's slice is never touched.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a shuffled copy of `items` using the thread-local RNG.
///
/// Empty and single-element inputs come back unchanged.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

/// Returns a shuffled copy of `items` using the given RNG (Fisher–Yates).
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}
