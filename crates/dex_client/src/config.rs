use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use serde::Deserialize;
use url::Url;

use crate::DEFAULT_BASE_URL;

pub const SETTINGS_FILE: &str = "pokedex.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub assets_dir: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.into(),
            assets_dir: PathBuf::from("."),
            log_filter: "info".into(),
        }
    }
}

/// Settings plus the reason a present settings file was skipped, for logging
/// once the subscriber is installed.
pub struct LoadedSettings {
    pub settings: Settings,
    pub file_error: Option<anyhow::Error>,
}

/// Defaults, then `pokedex.toml` in the working directory, then `POKEDEX_*` env vars.
pub fn load_settings() -> LoadedSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut file_error = None;

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<Settings>(&raw)
            .with_context(|| format!("ignoring malformed settings file '{}'", path.display()))
        {
            Ok(file_cfg) => settings = file_cfg,
            Err(err) => file_error = Some(err),
        }
    }

    let read_var = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read_var("POKEDEX_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = read_var("POKEDEX_ASSETS_DIR") {
        settings.assets_dir = PathBuf::from(v);
    }
    if let Some(v) = read_var("POKEDEX_LOG") {
        settings.log_filter = v;
    }

    LoadedSettings {
        settings,
        file_error,
    }
}

pub fn validate_base_url(raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).with_context(|| format!("invalid api base url '{raw}'"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!(
            "api base url '{raw}' must use http or https, not '{}'",
            parsed.scheme()
        );
    }
    Ok(raw.to_string())
}
