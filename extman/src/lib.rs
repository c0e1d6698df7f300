// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! The extman crate contains the functionality required to generate, read, patch and write the
//! `manifest.json` document of a browser extension, along with the key material that goes into it.

pub mod keys;
pub mod manifest;
