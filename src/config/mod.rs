//! Load and validate the launcher configuration file.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod profile;
pub mod regedit;
pub mod telemetry;

pub use profile::{parse_profile_section, ProfileSection, RawProfileSection};
pub use regedit::{
    parse_regedit_section, RawRegeditSection, RegeditSection, DEFAULT_REGEDIT_PATH,
    DEFAULT_SILENT_SWITCH,
};

pub const CONFIG_ENV_KEY: &str = "RUN_AS_REGISTRY_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "run-as-registry.toml";

/// How the configuration path was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// `--config <PATH>`.
    CommandLine,
    /// `RUN_AS_REGISTRY_CONFIG`.
    Environment,
    /// `run-as-registry.toml` in the current directory.
    Default,
}

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub regedit: RegeditSection,
    pub profile: Option<ProfileSection>,
    /// File the configuration came from, `None` when built from defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    regedit: Option<RawRegeditSection>,
    profile: Option<RawProfileSection>,
}

impl LauncherConfig {
    /// Load the configuration from a path resolved by the CLI.
    ///
    /// Only the default location may be absent; explicitly requested files
    /// must exist.
    pub fn load(path: PathBuf, origin: ConfigOrigin) -> Result<Self, ConfigError> {
        telemetry::log_source(&path, origin);
        match origin {
            ConfigOrigin::Default => Self::load_optional(&path),
            ConfigOrigin::CommandLine | ConfigOrigin::Environment => Self::load_from_path(path),
        }
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.is_file() {
            return Self::load_from_path(path.to_path_buf());
        }
        telemetry::log_defaults(path);
        Ok(Self::default())
    }

    /// Load configuration from a specific path. The file must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "run_as_registry::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(
            config::File::from(path.clone()).format(config::FileFormat::Toml),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "run_as_registry::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "run_as_registry::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "run_as_registry::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawLauncherConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let regedit = parse_regedit_section(raw.regedit, &path)?;
        let profile = parse_profile_section(raw.profile, &path)?;

        Ok(Self {
            regedit,
            profile,
            source_path: Some(path),
        })
    }
}
