// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! This module implements Version 3 of the extension manifest JSON document, restricted to the
//! fields that the calendar event extension uses.
//!
//! Field declaration order is significant: it is the order in which the fields are serialized, and
//! therefore the order in which they appear in the written file.

use crate::keys::signing::SigningKey;

use serde::Serialize;
use serde_json::{Map, Value};

/// The manifest format version written into every document.
pub const MANIFEST_VERSION: u32 = 3;

pub const EXTENSION_NAME: &str = "Calendar Event Creator";
pub const EXTENSION_VERSION: &str = "1.0";
pub const EXTENSION_DESCRIPTION: &str = "Create Google Calendar events from web pages";

/// The OAuth client identifier that a freshly generated manifest carries until it is patched with
/// the identifier for the target deployment.
pub const DEFAULT_CLIENT_ID: &str =
    "828541577236-2vlknoonm9sgo5usu8o17mckm7c83gj9.apps.googleusercontent.com";

const PERMISSIONS: &[&str] = &["activeTab", "identity", "tabs"];
const HOST_PERMISSIONS: &[&str] = &["https://www.googleapis.com/*"];
const OAUTH_SCOPES: &[&str] = &["https://www.googleapis.com/auth/calendar.events"];
const POPUP_PAGE: &str = "popup/popup.html";
const SERVICE_WORKER: &str = "background/background.js";
const ICON_PATH: &str = "assets/icon.svg";
const ICON_SIZES: &[&str] = &["48", "128"];

/// Describes the toolbar button of the extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Action {
    /// Path to the HTML page shown when the toolbar button is clicked.
    pub default_popup: String,

    /// Mapping of icon size (in pixels, as a string) to icon path.
    pub default_icon: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Background {
    /// Path to the background service worker script.
    pub service_worker: String,
}

/// OAuth settings used by the browser identity API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OAuth2 {
    /// The client identifier issued by the authorization provider.
    pub client_id: String,

    /// The scopes requested when obtaining a token.
    pub scopes: Vec<String>,
}

/// The root level of the manifest document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Root {
    pub manifest_version: u32,

    /// The human-readable name of the extension.
    pub name: String,

    /// The extension version string.
    pub version: String,

    pub description: String,

    /// The base64-encoded signing key. See [SigningKey].
    pub key: String,

    /// API permissions requested by the extension.
    pub permissions: Vec<String>,

    /// URL match patterns that the extension may access.
    pub host_permissions: Vec<String>,

    pub action: Action,

    pub background: Background,

    pub oauth2: OAuth2,

    /// Mapping of icon size to icon path, used outside the toolbar.
    pub icons: Map<String, Value>,
}

impl Root {
    /// Builds the complete manifest for the extension, embedding the given signing key. Every other
    /// field is fixed.
    pub fn with_signing_key(key: &SigningKey) -> Root {
        Root {
            manifest_version: MANIFEST_VERSION,
            name: EXTENSION_NAME.to_string(),
            version: EXTENSION_VERSION.to_string(),
            description: EXTENSION_DESCRIPTION.to_string(),
            key: key.to_base64(),
            permissions: to_strings(PERMISSIONS),
            host_permissions: to_strings(HOST_PERMISSIONS),
            action: Action {
                default_popup: POPUP_PAGE.to_string(),
                default_icon: icon_map(),
            },
            background: Background {
                service_worker: SERVICE_WORKER.to_string(),
            },
            oauth2: OAuth2 {
                client_id: DEFAULT_CLIENT_ID.to_string(),
                scopes: to_strings(OAUTH_SCOPES),
            },
            icons: icon_map(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn icon_map() -> Map<String, Value> {
    ICON_SIZES
        .iter()
        .map(|size| (size.to_string(), Value::from(ICON_PATH)))
        .collect()
}
