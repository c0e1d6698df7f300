// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! Base CLI implementation.

use crate::subcommands::Subcommand;
use structopt::StructOpt;

/// Struct representing the command-line interface of extman-tool
#[derive(Debug, StructOpt)]
#[structopt(
    name = "extman-tool",
    about = "Generates and patches browser extension manifests"
)]
pub struct ExtmanToolApp {
    /// The subcommand -- e.g., generate-key or update-manifest
    #[structopt(subcommand)]
    pub subcommand: Subcommand,
}
