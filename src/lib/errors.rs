use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::parser::{RequiredField, ValueSwitch};

/// Command-line validation failures. Only the first violation is reported.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A value-taking switch was given twice, or again while its value was pending.
    #[error("Switch {switch} may be specified only once")]
    DuplicateSwitch { switch: ValueSwitch },
    /// A switch or value appeared where the grammar does not allow it.
    #[error("Switches are mutually exclusive or misplaced near `{token}`")]
    MisplacedSwitch { token: String },
    /// A token looks like a switch but is not one.
    #[error("Unrecognized switch `{token}`")]
    UnrecognizedSwitch { token: String },
    /// Parsing ended without a required value.
    #[error("Missing required {field}")]
    MissingRequired { field: RequiredField },
}

impl ValidationError {
    /// Short stable identifier, used in self-test reports.
    pub const fn kind(&self) -> &'static str {
        match self {
            ValidationError::DuplicateSwitch { .. } => "duplicate_switch",
            ValidationError::MisplacedSwitch { .. } => "misplaced_switch",
            ValidationError::UnrecognizedSwitch { .. } => "unrecognized_switch",
            ValidationError::MissingRequired { .. } => "missing_required",
        }
    }
}

/// Tokens the command-line grammar cannot express.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("An empty argument cannot end the command line")]
    TrailingEmpty,
    #[error("Quoted argument `{argument}` cannot end with a backslash")]
    TrailingBackslash { argument: String },
}

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// A saved profile that cannot be turned into launch arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("The application to launch is not set")]
    ApplicationNotSet,
    #[error("Application {path} was not found")]
    ApplicationNotFound { path: PathBuf },
    #[error("The registry file is not set")]
    RegFileNotSet,
    #[error("Registry file {path} was not found")]
    RegFileNotFound { path: PathBuf },
}

/// Failures while starting the import helper or the target application.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to start registry import `{program}`: {source}")]
    ImportSpawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to start application {path}: {source}")]
    ApplicationSpawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to query running processes: {source}")]
    InstanceProbe {
        #[source]
        source: io::Error,
    },
    #[error("Launch configuration has no {field}")]
    Incomplete { field: RequiredField },
}
