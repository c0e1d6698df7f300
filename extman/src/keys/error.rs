// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! This module provides the error definitions for errors that can occur while generating or
//! interpreting extension key material.

use thiserror::Error;

/// Specific error types for errors that can occur within key material handling.
#[derive(Error, Debug)]
pub enum KeyError {
    /// Error coming from the random source, which can happen if the operating system is unable
    /// to supply secure random bytes.
    #[error(transparent)]
    RandomSourceError(#[from] rand::Error),

    #[error(transparent)]
    Base64DecodeError(#[from] base64::DecodeError),

    /// A signing key was decoded successfully, but it does not contain the expected number of bytes.
    #[error("The signing key is {actual} bytes long, but {expected} bytes are required.")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// An extension identifier has the wrong length or contains characters outside `a-z`.
    #[error("The extension identifier must be {0} lowercase ASCII letters.")]
    InvalidIdentifier(usize),
}
