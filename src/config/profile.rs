//! Saved launch settings and their conversion into command-line arguments.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    lib::{
        errors::{ConfigError, ProfileError},
        paths::is_existing_dir,
    },
    parser::{LaunchConfig, Switch, ValueSwitch},
};

/// Launch settings stored under `[profile]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSection {
    pub application_file_path: PathBuf,
    pub arguments: Option<String>,
    pub working_folder_path: Option<PathBuf>,
    pub reg_file_path: PathBuf,
    pub one_instance: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawProfileSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_file_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_folder_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_file_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_instance: Option<bool>,
}

/// TOML document written by `--save-profile`.
#[derive(Debug, Serialize)]
struct ProfileDocument<'a> {
    profile: &'a RawProfileSection,
}

impl RawProfileSection {
    /// Capture a validated launch configuration for saving.
    pub fn from_launch_config(config: &LaunchConfig) -> Self {
        Self {
            application_file_path: config.application_file_path.as_ref().map(PathBuf::from),
            arguments: config.application_arguments.clone(),
            working_folder_path: config.working_folder_path.as_ref().map(PathBuf::from),
            reg_file_path: config.reg_file_path.as_ref().map(PathBuf::from),
            one_instance: Some(config.one_instance),
        }
    }

    /// Serialize as a `[profile]` table.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&ProfileDocument { profile: self })
    }
}

pub fn parse_profile_section(
    raw: Option<RawProfileSection>,
    path: &Path,
) -> Result<Option<ProfileSection>, ConfigError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let application_file_path = raw.application_file_path.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "profile.application_file_path",
    })?;
    let reg_file_path = raw.reg_file_path.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "profile.reg_file_path",
    })?;

    Ok(Some(ProfileSection {
        application_file_path,
        arguments: raw.arguments,
        working_folder_path: raw.working_folder_path,
        reg_file_path,
        one_instance: raw.one_instance.unwrap_or(false),
    }))
}

impl ProfileSection {
    /// Build the launcher's own argument list from the saved settings.
    ///
    /// Blank arguments are skipped and the working folder is only passed when
    /// it exists. Both the application and the registry file must exist.
    pub fn build_arguments(&self) -> Result<Vec<String>, ProfileError> {
        let mut arguments = Vec::new();

        if is_blank(&self.application_file_path) {
            return Err(ProfileError::ApplicationNotSet);
        }
        if !self.application_file_path.is_file() {
            return Err(ProfileError::ApplicationNotFound {
                path: self.application_file_path.clone(),
            });
        }
        push_value(
            &mut arguments,
            ValueSwitch::ApplicationFilePath,
            path_text(&self.application_file_path),
        );

        if let Some(value) = self.arguments.as_deref().filter(|v| !v.trim().is_empty()) {
            push_value(
                &mut arguments,
                ValueSwitch::ApplicationArguments,
                value.to_string(),
            );
        }

        if let Some(folder) = self.working_folder_path.as_deref().filter(|p| is_existing_dir(p)) {
            push_value(
                &mut arguments,
                ValueSwitch::WorkingFolderPath,
                path_text(folder),
            );
        }

        if self.one_instance {
            arguments.push(Switch::OneInstance.canonical().to_string());
        }

        if is_blank(&self.reg_file_path) {
            return Err(ProfileError::RegFileNotSet);
        }
        if !self.reg_file_path.is_file() {
            return Err(ProfileError::RegFileNotFound {
                path: self.reg_file_path.clone(),
            });
        }
        push_value(
            &mut arguments,
            ValueSwitch::RegFilePath,
            path_text(&self.reg_file_path),
        );

        Ok(arguments)
    }
}

fn push_value(arguments: &mut Vec<String>, switch: ValueSwitch, value: String) {
    arguments.push(switch.canonical().to_string());
    arguments.push(value);
}

fn is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
