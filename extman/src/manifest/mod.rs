// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! This module implements the extension manifest, which is a JSON document named `manifest.json`
//! at the root of the extension.
//!
//! Manifests are produced in two ways. A complete document can be built from the typed data model in
//! [v3], which fixes every field apart from the generated signing key. An existing document can also
//! be loaded as an untyped JSON value and patched in place (see [patch]), in which case every field
//! that is not explicitly patched, including fields unknown to the data model, keeps both its value
//! and its position in the document.

pub mod error;
pub mod file;
pub mod patch;
pub mod v3;

/// Convenient result alias for this module.
pub type Result<T> = std::result::Result<T, error::Error>;
