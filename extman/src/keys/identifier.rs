// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! The extension identifier that is reported to the operator when a manifest is generated.
//!
//! The identifier is not derived from the signing key. It is generated independently and is never
//! persisted, so it should be treated as informational output.

use super::error::KeyError;
use super::{RandomSource, Result};

use std::fmt;
use std::str::FromStr;

/// Number of characters in an extension identifier.
pub const EXTENSION_ID_LEN: usize = 32;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A 32-character identifier made up of lowercase ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionId(String);

impl ExtensionId {
    /// Draws a new identifier from the given random source. One random byte is consumed per
    /// character, and each byte `b` selects the letter at index `b % 26`.
    pub fn generate<R: RandomSource>(rng: &mut R) -> Result<ExtensionId> {
        let mut bytes = [0u8; EXTENSION_ID_LEN];
        rng.fill(&mut bytes)?;
        Ok(ExtensionId::from_bytes(&bytes))
    }

    fn from_bytes(bytes: &[u8; EXTENSION_ID_LEN]) -> ExtensionId {
        let id = bytes
            .iter()
            .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
            .collect();
        ExtensionId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ExtensionId {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<ExtensionId> {
        if s.len() != EXTENSION_ID_LEN || !s.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(KeyError::InvalidIdentifier(EXTENSION_ID_LEN));
        }
        Ok(ExtensionId(s.to_string()))
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
