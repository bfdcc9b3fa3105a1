//! `LaunchRequest` and config path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::{ConfigOrigin, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

/// Absolute configuration path and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub origin: ConfigOrigin,
}

/// Where the launcher switches come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchSource {
    /// Already split by the shell.
    Arguments(Vec<String>),
    /// A raw command line that still needs tokenizing.
    CommandLine(String),
    /// No switches given; use the `[profile]` from the config file.
    Profile,
}

/// What to do with a validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Launch,
    Print,
    SaveProfile(PathBuf),
}

/// Resolved launch request.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub config: ConfigSource,
    pub switches: SwitchSource,
    pub output: OutputMode,
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_source(override_path: Option<PathBuf>) -> Result<ConfigSource> {
    let (path, origin) = match override_path {
        Some(path) => (path, ConfigOrigin::CommandLine),
        None => match env::var_os(CONFIG_ENV_KEY).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), ConfigOrigin::Environment),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigOrigin::Default),
        },
    };

    if path.is_absolute() {
        return Ok(ConfigSource { path, origin });
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(ConfigSource {
        path: cwd.join(path),
        origin,
    })
}
