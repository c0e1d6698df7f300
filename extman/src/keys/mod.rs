// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! This module defines the key material that is produced when a fresh extension manifest is
//! generated.
//!
//! There are two values, both drawn from independent runs of a secure random source:
//!
//! - The [signing::SigningKey], which is embedded in the manifest as its `key` field. The browser
//! derives a stable identity for the extension from this value, so it must be kept secret and must
//! only change when the manifest is deliberately regenerated.
//! - The [identifier::ExtensionId], a 32-character lowercase string that is reported to the operator
//! alongside the key. It is informational only and is never written into the manifest.
//!
//! Random bytes are obtained through the [RandomSource] trait, so that callers can substitute a
//! deterministic source in tests. Production code should use [system_random].

pub mod error;
pub mod identifier;
pub mod signing;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Convenient result alias for this module, where errors are of type [error::KeyError].
pub type Result<T> = std::result::Result<T, error::KeyError>;

/// This trait models a source of cryptographically secure random bytes.
///
/// Every `rand` generator that is marked as a [CryptoRng] is a random source, which means that
/// [OsRng] (the operating system generator) and seeded generators such as `StdRng` can be used
/// directly. General-purpose generators that are not marked as [CryptoRng] are deliberately
/// excluded.
pub trait RandomSource {
    /// Fills the whole of the given buffer with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(dest)?;
        Ok(())
    }
}

/// Returns the random source used for real key material: the operating system generator.
pub fn system_random() -> OsRng {
    OsRng
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{RandomSource, Result};

    /// Random source that hands out a fixed byte pattern, cycling when exhausted.
    pub(crate) struct FixedBytes {
        pattern: Vec<u8>,
        position: usize,
    }

    impl FixedBytes {
        pub(crate) fn new(pattern: &[u8]) -> FixedBytes {
            FixedBytes {
                pattern: pattern.to_vec(),
                position: 0,
            }
        }
    }

    impl RandomSource for FixedBytes {
        fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
            for byte in dest.iter_mut() {
                *byte = self.pattern[self.position % self.pattern.len()];
                self.position += 1;
            }
            Ok(())
        }
    }

    #[test]
    fn system_random_fills_buffer() {
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        let mut rng = super::system_random();
        rng.fill(&mut first).unwrap();
        rng.fill(&mut second).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn fixed_bytes_cycles_pattern() {
        let mut source = FixedBytes::new(&[1, 2, 3]);
        let mut buf = [0u8; 7];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 1, 2, 3, 1]);
    }
}
