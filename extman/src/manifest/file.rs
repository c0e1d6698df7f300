// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! Reading and writing manifest files on the local filesystem.
//!
//! Manifests are written pretty-printed with a two-space indent and no trailing newline. Object
//! keys are written in insertion order, so a document that is read, modified and written again
//! keeps its original layout.

use super::Result;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads the manifest at the given path as an untyped JSON document.
///
/// This fails with an I/O error if the file cannot be opened, and with a JSON error if its contents
/// are not well-formed JSON.
pub fn read_document(path: &Path) -> Result<Value> {
    debug!("Reading manifest from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let document = serde_json::from_reader(reader)?;
    Ok(document)
}

/// Serializes the given document and writes it to the given path, replacing any existing file.
///
/// The document is serialized in full before the file is opened, so a serialization failure
/// leaves any existing file untouched.
pub fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(document)?;
    debug!("Writing {} bytes of manifest to {}", bytes.len(), path.display());
    std::fs::write(path, bytes)?;
    Ok(())
}
