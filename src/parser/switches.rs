//! Recognized command-line switches and their spellings.
use std::fmt;

use serde::Serialize;

const HYPHEN: char = '-';
const SLASH: char = '/';

/// Switch families that take exactly one following value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSwitch {
    ApplicationFilePath,
    ApplicationArguments,
    WorkingFolderPath,
    RegFilePath,
}

impl ValueSwitch {
    /// Both accepted spellings, hyphen form first.
    pub const fn spellings(&self) -> (&'static str, &'static str) {
        match self {
            ValueSwitch::ApplicationFilePath => ("-i", "/i"),
            ValueSwitch::ApplicationArguments => ("-a", "/a"),
            ValueSwitch::WorkingFolderPath => ("-w", "/w"),
            ValueSwitch::RegFilePath => ("-r", "/r"),
        }
    }

    /// Slash spelling, used when rendering command lines.
    pub const fn canonical(&self) -> &'static str {
        self.spellings().1
    }

    pub const fn field_name(&self) -> &'static str {
        match self {
            ValueSwitch::ApplicationFilePath => "application file path",
            ValueSwitch::ApplicationArguments => "application arguments",
            ValueSwitch::WorkingFolderPath => "working folder path",
            ValueSwitch::RegFilePath => "registry file path",
        }
    }
}

impl fmt::Display for ValueSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hyphen, _) = self.spellings();
        write!(f, "{hyphen} ({})", self.field_name())
    }
}

/// Fields that must be present once a parse finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    ApplicationFilePath,
    RegFilePath,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::ApplicationFilePath => f.write_str("application file path (-i)"),
            RequiredField::RegFilePath => f.write_str("registry file path (-r)"),
        }
    }
}

/// Every switch the validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    Value(ValueSwitch),
    OneInstance,
    Help,
    SelfTest,
}

impl Switch {
    /// Match a token against the switch table. Matching is case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        let switch = match token {
            "-i" | "/i" => Switch::Value(ValueSwitch::ApplicationFilePath),
            "-a" | "/a" => Switch::Value(ValueSwitch::ApplicationArguments),
            "-w" | "/w" => Switch::Value(ValueSwitch::WorkingFolderPath),
            "-r" | "/r" => Switch::Value(ValueSwitch::RegFilePath),
            "-o" | "/o" => Switch::OneInstance,
            "-h" | "/h" | "-?" | "/?" => Switch::Help,
            "-T" | "/T" => Switch::SelfTest,
            _ => return None,
        };
        Some(switch)
    }

    /// Slash spelling, used when rendering command lines.
    pub const fn canonical(&self) -> &'static str {
        match self {
            Switch::Value(switch) => switch.canonical(),
            Switch::OneInstance => "/o",
            Switch::Help => "/h",
            Switch::SelfTest => "/T",
        }
    }
}

/// True when the token carries a switch prefix, known or not.
pub fn looks_like_switch(token: &str) -> bool {
    token.starts_with(HYPHEN) || token.starts_with(SLASH)
}
