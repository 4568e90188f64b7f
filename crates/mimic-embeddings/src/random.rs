//! Random sources for vector generation.
//!
//! Generation is abstracted behind [`RandomSource`] so the store can run on
//! OS entropy in production-like tests and on a seeded generator when
//! reproducibility matters.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

/// A source of independent uniform values in `[-1, 1]`.
pub trait RandomSource: Send {
    /// Draw the next value.
    fn next_normalized(&mut self) -> f32;
}

/// Map 24 bits of entropy onto `[-1, 1]`.
///
/// 24 bits fit an `f32` mantissa exactly, so the quantization is uniform.
fn normalized_from_bits(bits: u32) -> f32 {
    let n = (bits >> 8) as f32;
    2.0 * (n / (1u32 << 24) as f32) - 1.0
}

/// Cryptographically strong source backed by the operating system.
///
/// A failed entropy read degrades to `0.0` for that coordinate rather than
/// aborting the draw; a source that is dead outright produces an all-zero
/// vector, which [`DotProductEmbeddings`](crate::DotProductEmbeddings)
/// rejects at construction with [`MimicError::Entropy`](mimic_core::MimicError).
#[derive(Debug, Default)]
pub struct EntropySource;

impl RandomSource for EntropySource {
    fn next_normalized(&mut self) -> f32 {
        let mut buf = [0u8; 4];
        match OsRng.try_fill_bytes(&mut buf) {
            Ok(()) => normalized_from_bits(u32::from_le_bytes(buf)),
            Err(_) => 0.0,
        }
    }
}

/// Deterministic source for reproducible tests.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_normalized(&mut self) -> f32 {
        normalized_from_bits(self.rng.next_u32())
    }
}

/// Generate a vector of `dim` independent uniform values in `[-1, 1]`.
pub fn normalized_vector(source: &mut dyn RandomSource, dim: usize) -> Vec<f32> {
    (0..dim).map(|_| source.next_normalized()).collect()
}
