// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! Individual commands supported by extman-tool.

mod generate;
mod update;

use crate::error::Result;
use crate::subcommands::generate::GenerateKey;
use crate::subcommands::update::UpdateManifest;

use structopt::StructOpt;

/// Command-line interface to extman-tool operations.
#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Generates a fresh signing key and extension identifier, and writes a complete manifest
    /// containing the key. Any existing manifest is overwritten.
    GenerateKey(GenerateKey),

    /// Patches the OAuth client identifier into an existing manifest, taking the value from the
    /// command-line or from the `GOOGLE_CLIENT_ID` environment variable.
    UpdateManifest(UpdateManifest),
}

impl Subcommand {
    /// Runs the command.
    pub fn run(&self) -> Result<()> {
        match &self {
            Subcommand::GenerateKey(cmd) => cmd.run(),
            Subcommand::UpdateManifest(cmd) => cmd.run(),
        }
    }
}
