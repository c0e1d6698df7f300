// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! Error definitions/handling.

use thiserror::Error;

/// Errors in extman-tool
#[derive(Error, Debug)]
pub enum Error {
    /// Error emanating from standard I/O.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Errors coming from manifest processing, due to the manifest file being missing, unreadable,
    /// unwritable or malformed in some way.
    #[error(transparent)]
    ManifestProcessingError(#[from] extman::manifest::error::Error),

    /// Errors relating to the generation of key material.
    #[error(transparent)]
    KeyGenerationError(#[from] extman::keys::error::KeyError),

    /// Error emanating from the extman-tool itself.
    #[error(transparent)]
    ToolError(#[from] ToolErrorKind),
}

/// Errors originating in the extman-tool itself.
#[derive(Error, Debug)]
pub enum ToolErrorKind {
    /// There is some missing configuration for a command, such as a required environment variable or
    /// command-line option. Empty values count as missing.
    #[error("Missing configuration: {0} is not set")]
    MissingConfiguration(String),
}

/// A Result type with the Err variant set as a ToolError
pub type Result<T> = std::result::Result<T, Error>;
