// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! Generates the key material for an extension and writes a complete manifest that embeds the
//! signing key.

use crate::error::Result;

use extman::keys::identifier::ExtensionId;
use extman::keys::signing::SigningKey;
use extman::keys::{system_random, RandomSource};
use extman::manifest::file::write_document;
use extman::manifest::v3::Root;

use log::info;
use structopt::StructOpt;

use std::io::Write;
use std::path::PathBuf;

/// Models the options required by the generate-key command.
#[derive(Debug, StructOpt)]
pub struct GenerateKey {
    /// The manifest file to write. Any existing file at this location is replaced.
    #[structopt(
        short = "m",
        long = "manifest",
        default_value = "manifest.json",
        parse(from_os_str)
    )]
    manifest_path: PathBuf,
}

impl GenerateKey {
    /// Draws the signing key and the extension identifier from the given random source, then writes
    /// the manifest. The identifier is returned to the caller and is not part of the manifest.
    ///
    /// The key and the identifier come from two separate draws, so they are independent.
    fn generate_with<R: RandomSource>(&self, rng: &mut R) -> Result<ExtensionId> {
        info!("Generating signing key...");
        let key = SigningKey::generate(rng)?;
        let extension_id = ExtensionId::generate(rng)?;

        let manifest = Root::with_signing_key(&key);
        info!("Writing manifest to {}...", self.manifest_path.display());
        write_document(&self.manifest_path, &manifest)?;

        Ok(extension_id)
    }

    /// Generates key material from the given random source, writes the manifest, and reports the
    /// extension identifier to `out` as a single `Extension ID: <id>` line.
    fn generate_and_report<R: RandomSource, W: Write>(
        &self,
        rng: &mut R,
        out: &mut W,
    ) -> Result<()> {
        let extension_id = self.generate_with(rng)?;

        // Identifier on its own line so that scripts can pick it up.
        writeln!(out, "Extension ID: {}", extension_id)?;

        Ok(())
    }

    /// Generates new key material with the operating system random generator, writes the manifest,
    /// and prints the extension identifier on standard output.
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.generate_and_report(&mut system_random(), &mut out)
    }
}
