// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! This module provides the error definitions for errors that can occur while reading, patching
//! or writing a manifest file.

use thiserror::Error;

/// Specific error types for manifest processing.
#[derive(Error, Debug)]
pub enum Error {
    /// An error that has been re-badged from the `std::io` subsystem. This kind of error arises
    /// when the manifest file is missing, unreadable, or cannot be written (for example because
    /// the containing directory does not exist).
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Error coming from the serde_json crate, which happens when the manifest file does not
    /// contain well-formed JSON.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// The manifest is valid JSON, but its structure does not allow the requested operation.
    #[error(transparent)]
    ManifestError(#[from] ManifestErrorKind),
}

/// These error variants refer to errors that are raised directly by code in the manifest module,
/// as opposed to errors that are simply being re-badged from underlying subsystems.
#[derive(Error, Debug)]
pub enum ManifestErrorKind {
    #[error("The manifest document is not a JSON object.")]
    RootNotAnObject,

    #[error("The manifest has no `oauth2` object.")]
    OAuthSectionMissing,
}
