// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! In-place patching of an existing manifest.
//!
//! The only field that may be patched is `oauth2.client_id`. The document is handled as untyped
//! JSON so that every other field survives unchanged, in its original position.

use super::error::ManifestErrorKind;
use super::file::{read_document, write_document};
use super::Result;

use log::info;
use serde_json::Value;

use std::path::Path;

/// Sets `oauth2.client_id` in the given document. Other members of `oauth2` are left alone, and an
/// existing `client_id` member keeps its position within the object.
pub fn set_oauth_client_id(document: &mut Value, client_id: &str) -> Result<()> {
    let root = document
        .as_object_mut()
        .ok_or(ManifestErrorKind::RootNotAnObject)?;
    let oauth2 = root
        .get_mut("oauth2")
        .and_then(Value::as_object_mut)
        .ok_or(ManifestErrorKind::OAuthSectionMissing)?;
    oauth2.insert("client_id".to_string(), Value::from(client_id));
    Ok(())
}

/// Reads the manifest at the given path, sets its OAuth client identifier, and writes it back.
///
/// Nothing is written unless the file was read, parsed and patched successfully.
pub fn patch_client_id_file(path: &Path, client_id: &str) -> Result<()> {
    let mut document = read_document(path)?;
    set_oauth_client_id(&mut document, client_id)?;
    write_document(path, &document)?;
    info!("Updated OAuth client identifier in {}", path.display());
    Ok(())
}
