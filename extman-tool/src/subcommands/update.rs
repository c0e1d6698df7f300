// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! Patches the OAuth client identifier into an existing manifest.

use crate::error::Result;
use crate::util::get_config_from_command_or_env;

use extman::manifest::patch::patch_client_id_file;

use log::info;
use structopt::StructOpt;

use std::path::PathBuf;

/// Environment variable consulted for the client identifier when none is given on the command-line.
pub const CLIENT_ID_ENV_VAR: &str = "GOOGLE_CLIENT_ID";

/// Models the options required by the update-manifest command.
#[derive(Debug, StructOpt)]
pub struct UpdateManifest {
    /// The manifest file to patch. It must already exist and contain an `oauth2` section.
    #[structopt(
        short = "m",
        long = "manifest",
        default_value = "manifest.json",
        parse(from_os_str)
    )]
    manifest_path: PathBuf,

    /// The OAuth client identifier to write into the manifest. If this option is not specified, then
    /// it will be obtained from the `GOOGLE_CLIENT_ID` environment variable instead.
    #[structopt(short = "c", long = "client-id")]
    client_id: Option<String>,
}

impl UpdateManifest {
    /// Sets `oauth2.client_id` in the manifest and leaves every other field untouched. The client
    /// identifier is resolved before the manifest is touched, so a missing value never causes a write.
    pub fn run(&self) -> Result<()> {
        let client_id = get_config_from_command_or_env(
            &self.client_id,
            CLIENT_ID_ENV_VAR,
            "OAuth client identifier",
        )?;

        info!("Patching manifest {}...", self.manifest_path.display());
        patch_client_id_file(&self.manifest_path, &client_id)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{UpdateManifest, CLIENT_ID_ENV_VAR};
    use crate::error::{Error, ToolErrorKind};

    use serde_json::Value;

    use std::path::Path;

    const MANIFEST: &str = r#"{
  "manifest_version": 3,
  "name": "Calendar Event Creator",
  "key": "a2V5IGJ5dGVzIHRoYXQgbXVzdCBzdXJ2aXZlIHRoZSBwYXRjaA==",
  "oauth2": {
    "client_id": "old",
    "scopes": [
      "https://www.googleapis.com/auth/calendar.events"
    ]
  }
}"#;

    fn write_manifest(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("manifest.json");
        std::fs::write(&path, MANIFEST).unwrap();
        path
    }

    #[test]
    fn client_id_from_command_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path());
        let cmd = UpdateManifest {
            manifest_path: path.clone(),
            client_id: Some("abc123".to_string()),
        };
        cmd.run().unwrap();

        let document: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let original: Value = serde_json::from_str(MANIFEST).unwrap();
        assert_eq!(document["oauth2"]["client_id"], "abc123");
        assert_eq!(document["key"], original["key"]);
        assert_eq!(document["oauth2"]["scopes"], original["oauth2"]["scopes"]);
        assert_eq!(document["name"], original["name"]);
    }

    // Every test that touches GOOGLE_CLIENT_ID lives here, because the environment is shared by
    // all tests in the process.
    #[test]
    fn client_id_from_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(dir.path());
        let cmd = UpdateManifest {
            manifest_path: path.clone(),
            client_id: None,
        };

        std::env::remove_var(CLIENT_ID_ENV_VAR);
        match cmd.run() {
            Err(Error::ToolError(ToolErrorKind::MissingConfiguration(name))) => {
                assert_eq!(name, CLIENT_ID_ENV_VAR)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), MANIFEST);

        std::env::set_var(CLIENT_ID_ENV_VAR, "");
        assert!(cmd.run().is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), MANIFEST);

        std::env::set_var(CLIENT_ID_ENV_VAR, "abc123");
        cmd.run().unwrap();
        let first = std::fs::read(&path).unwrap();
        cmd.run().unwrap();
        let second = std::fs::read(&path).unwrap();
        std::env::remove_var(CLIENT_ID_ENV_VAR);

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            MANIFEST.replace("\"old\"", "\"abc123\"")
        );
    }

    #[test]
    fn invalid_manifest_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let cmd = UpdateManifest {
            manifest_path: path.clone(),
            client_id: Some("abc123".to_string()),
        };

        assert!(matches!(cmd.run(), Err(Error::ManifestProcessingError(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2");
    }

    #[test]
    fn missing_manifest_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        let cmd = UpdateManifest {
            manifest_path: path.clone(),
            client_id: Some("abc123".to_string()),
        };

        assert!(matches!(cmd.run(), Err(Error::ManifestProcessingError(_))));
        assert!(!path.exists());
    }
}
