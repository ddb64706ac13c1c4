//! Shared configuration for swview.
//!
//! TOML profiles naming where agent and transceiver snapshots live, plus
//! global display defaults. The CLI layers its flags on top of what is
//! resolved here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String, available: Vec<String> },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named switch profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Keep going with no transceiver data when the service fails.
    #[serde(default)]
    pub continue_on_error: bool,

    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            continue_on_error: false,
            retries: default_retries(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_retries() -> u32 {
    3
}

/// A named switch: where its state snapshots are read from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// JSON export of the switch agent's port, aggregate and route state.
    pub agent_snapshot: PathBuf,

    /// JSON export of the transceiver service; absent means no module data.
    pub transceiver_snapshot: Option<PathBuf>,

    /// Override retry attempts.
    pub retries: Option<u32>,
}

// ── Resolved sources ────────────────────────────────────────────────

/// Snapshot locations and retry budget after profile resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub agent_snapshot: PathBuf,
    pub transceiver_snapshot: Option<PathBuf>,
    pub retries: u32,
}

impl Config {
    /// Profile to use: explicit name, then `default_profile`, then "default".
    pub fn active_profile_name(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into())
    }

    /// Resolve a profile into concrete snapshot sources.
    pub fn sources(&self, profile_name: &str) -> Result<Sources, ConfigError> {
        let profile = self
            .profiles
            .get(profile_name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: profile_name.into(),
                available: self.profile_names(),
            })?;

        if profile.agent_snapshot.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                field: "agent_snapshot".into(),
                reason: format!("profile '{profile_name}' has an empty path"),
            });
        }

        Ok(Sources {
            agent_snapshot: profile.agent_snapshot.clone(),
            transceiver_snapshot: profile.transceiver_snapshot.clone(),
            retries: profile.retries.unwrap_or(self.defaults.retries),
        })
    }

    /// Sorted profile names, for diagnostics.
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "swview", "swview").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("swview");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load from an explicit file, overlaid with `SWVIEW_*` variables.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SWVIEW_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Render the config as pretty TOML.
pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}
