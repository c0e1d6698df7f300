// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! extman-tool: command-line tooling for preparing browser extension manifests.

pub mod cli;
pub mod error;
pub mod subcommands;
pub mod util;
