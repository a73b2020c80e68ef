//! Shared helpers for tests across the workspace.

use arbitrary::{Arbitrary, Unstructured};
use rand_core::{CryptoRngCore, OsRng};

pub mod fixtures;

/// The default buffer size for the `ArbitraryGenerator`.
const ARB_GEN_LEN: usize = 65_536;

/// Produces random instances of any `Arbitrary` type from a reusable buffer.
#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    pub fn new() -> Self {
        Self::new_with_size(ARB_GEN_LEN)
    }

    /// Creates a generator whose buffer holds `s` bytes. Types with large
    /// collections need a bigger buffer to avoid truncated output.
    pub fn new_with_size(s: usize) -> Self {
        Self { buf: vec![0u8; s] }
    }

    /// Generates an arbitrary `T` seeded from [`OsRng`].
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a> + Clone,
    {
        self.generate_with_rng::<T, OsRng>(&mut OsRng)
    }

    /// Generates an arbitrary `T` seeded from the given rng.
    ///
    /// # Panics
    ///
    /// If `T` can't be built from several freshly filled buffers in a row.
    pub fn generate_with_rng<T, R>(&mut self, rng: &mut R) -> T
    where
        T: for<'a> Arbitrary<'a> + Clone,
        R: CryptoRngCore,
    {
        const MAX_ATTEMPTS: usize = 16;
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            rng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match T::arbitrary(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        panic!("Failed to generate arbitrary instance: {error_msg}");
    }
}
