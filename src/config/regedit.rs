use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{lib::errors::ConfigError, parser::looks_like_switch};

pub const DEFAULT_REGEDIT_PATH: &str = "regedit.exe";
pub const DEFAULT_SILENT_SWITCH: &str = "/s";

/// Registry import helper settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegeditSection {
    pub path: PathBuf,
    pub silent_switch: String,
}

impl Default for RegeditSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REGEDIT_PATH),
            silent_switch: DEFAULT_SILENT_SWITCH.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRegeditSection {
    pub path: Option<PathBuf>,
    pub silent_switch: Option<String>,
}

pub fn parse_regedit_section(
    raw: Option<RawRegeditSection>,
    path: &Path,
) -> Result<RegeditSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    let regedit_path = raw
        .path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REGEDIT_PATH));
    if regedit_path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "regedit.path",
            message: "Specify the registry editor executable".into(),
        });
    }

    let silent_switch = raw
        .silent_switch
        .unwrap_or_else(|| DEFAULT_SILENT_SWITCH.to_string());
    validate_silent_switch(&silent_switch, path)?;

    Ok(RegeditSection {
        path: regedit_path,
        silent_switch,
    })
}

fn validate_silent_switch(switch: &str, path: &Path) -> Result<(), ConfigError> {
    if switch.len() > 1 && looks_like_switch(switch) && !switch.contains(' ') {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "regedit.silent_switch",
        message: "Use a single switch starting with '-' or '/', such as /s".into(),
    })
}
