// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! The signing key that is embedded in the extension manifest.

use super::error::KeyError;
use super::{RandomSource, Result};

use std::fmt;

/// Length of the signing key, in bytes.
pub const SIGNING_KEY_LEN: usize = 32;

/// A freshly generated signing key for the manifest `key` field.
///
/// The key is 32 bytes of secure random data. In the manifest it is represented as a base64 string
/// using the standard alphabet with padding, which is exactly what [SigningKey::to_base64] yields.
/// The [fmt::Debug] implementation does not reveal the key bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    bytes: [u8; SIGNING_KEY_LEN],
}

impl SigningKey {
    /// Draws a new signing key from the given random source.
    pub fn generate<R: RandomSource>(rng: &mut R) -> Result<SigningKey> {
        let mut bytes = [0u8; SIGNING_KEY_LEN];
        rng.fill(&mut bytes)?;
        Ok(SigningKey { bytes })
    }

    /// Parses a signing key from its base64 manifest representation. The decoded value must be
    /// exactly [SIGNING_KEY_LEN] bytes long.
    pub fn from_base64(encoded: &str) -> Result<SigningKey> {
        let decoded = base64::decode(encoded)?;
        if decoded.len() != SIGNING_KEY_LEN {
            return Err(KeyError::InvalidKeyLength {
                expected: SIGNING_KEY_LEN,
                actual: decoded.len(),
            });
        }

        let mut bytes = [0u8; SIGNING_KEY_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(SigningKey { bytes })
    }

    /// Encodes the key as it appears in the manifest.
    pub fn to_base64(&self) -> String {
        base64::encode(&self.bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
