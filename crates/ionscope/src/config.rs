//! Settings file loading.
//!
//! TOML settings merged from the platform config directory, a local
//! `ionscope.toml` in the working directory (highest file precedence),
//! and `IONSCOPE_*` environment variables. All fields are optional --
//! the credential chain in `login.rs` decides what is actually required.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Name of the working-directory settings override file.
pub const LOCAL_SETTINGS_FILE: &str = "ionscope.toml";

/// Optional settings shared by both binaries.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Controller base URL override.
    pub controller: Option<String>,

    /// Static auth token (plaintext -- prefer the env variables).
    pub auth_token: Option<String>,

    /// Login email for the interactive-capable binary.
    pub email: Option<String>,

    /// Login password (plaintext).
    pub password: Option<String>,
}

/// Resolve the global settings path via XDG / platform conventions.
pub fn settings_path() -> PathBuf {
    ProjectDirs::from("io", "ionscope", "ionscope").map_or_else(
        || PathBuf::from(LOCAL_SETTINGS_FILE),
        |dirs| dirs.config_dir().join("settings.toml"),
    )
}

/// Load settings from the global file, the local override, and env vars.
pub fn load_settings() -> Result<Settings, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(settings_path()))
        .merge(Toml::file(LOCAL_SETTINGS_FILE))
        .merge(Env::prefixed("IONSCOPE_"));

    let settings: Settings = figment.extract()?;
    Ok(settings)
}

/// Load settings, falling back to defaults if nothing is configured.
pub fn load_settings_or_default() -> Settings {
    load_settings().unwrap_or_default()
}
