//! Switch validation state machine producing a [`LaunchConfig`].
use serde::Serialize;

use crate::lib::errors::ValidationError;

use super::switches::{looks_like_switch, RequiredField, Switch, ValueSwitch};

/// Validated result of parsing a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchConfig {
    pub application_file_path: Option<String>,
    pub application_arguments: Option<String>,
    pub working_folder_path: Option<String>,
    pub reg_file_path: Option<String>,
    pub one_instance: bool,
    pub help: bool,
    pub self_test: bool,
}

impl LaunchConfig {
    fn value(&self, switch: ValueSwitch) -> Option<&String> {
        match switch {
            ValueSwitch::ApplicationFilePath => self.application_file_path.as_ref(),
            ValueSwitch::ApplicationArguments => self.application_arguments.as_ref(),
            ValueSwitch::WorkingFolderPath => self.working_folder_path.as_ref(),
            ValueSwitch::RegFilePath => self.reg_file_path.as_ref(),
        }
    }

    fn slot(&mut self, switch: ValueSwitch) -> &mut Option<String> {
        match switch {
            ValueSwitch::ApplicationFilePath => &mut self.application_file_path,
            ValueSwitch::ApplicationArguments => &mut self.application_arguments,
            ValueSwitch::WorkingFolderPath => &mut self.working_folder_path,
            ValueSwitch::RegFilePath => &mut self.reg_file_path,
        }
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when the configuration asks for help or self-test instead of a launch.
    pub fn is_informational(&self) -> bool {
        self.help || self.self_test
    }

    /// Token sequence that reproduces this configuration, in `/i /a /w /o /r` order.
    pub fn to_arguments(&self) -> Vec<String> {
        if self.help {
            return vec![Switch::Help.canonical().to_string()];
        }
        if self.self_test {
            return vec![Switch::SelfTest.canonical().to_string()];
        }

        let mut arguments = Vec::new();
        for switch in [
            ValueSwitch::ApplicationFilePath,
            ValueSwitch::ApplicationArguments,
            ValueSwitch::WorkingFolderPath,
        ] {
            if let Some(value) = self.value(switch) {
                arguments.push(switch.canonical().to_string());
                arguments.push(value.clone());
            }
        }
        if self.one_instance {
            arguments.push(Switch::OneInstance.canonical().to_string());
        }
        if let Some(value) = &self.reg_file_path {
            arguments.push(ValueSwitch::RegFilePath.canonical().to_string());
            arguments.push(value.clone());
        }
        arguments
    }
}

/// Position of the state machine between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState<'a> {
    Idle,
    /// A value switch was read; the next token is its value.
    Expecting { switch: ValueSwitch, token: &'a str },
}

struct Validator<'a> {
    state: ParseState<'a>,
    config: LaunchConfig,
}

impl<'a> Validator<'a> {
    fn new() -> Self {
        Self {
            state: ParseState::Idle,
            config: LaunchConfig::default(),
        }
    }

    fn step(&mut self, token: &'a str) -> Result<(), ValidationError> {
        match Switch::from_token(token) {
            Some(Switch::Value(switch)) => {
                let pending_same = matches!(
                    self.state,
                    ParseState::Expecting { switch: pending, .. } if pending == switch
                );
                if self.config.value(switch).is_some() || pending_same {
                    return Err(ValidationError::DuplicateSwitch { switch });
                }
                if self.state != ParseState::Idle || self.config.is_informational() {
                    return Err(misplaced(token));
                }
                self.state = ParseState::Expecting { switch, token };
            }
            Some(Switch::OneInstance) => {
                if self.state != ParseState::Idle
                    || self.config.one_instance
                    || self.config.is_informational()
                {
                    return Err(misplaced(token));
                }
                self.config.one_instance = true;
            }
            Some(flag @ (Switch::Help | Switch::SelfTest)) => {
                if self.state != ParseState::Idle || !self.config.is_empty() {
                    return Err(misplaced(token));
                }
                if flag == Switch::Help {
                    self.config.help = true;
                } else {
                    self.config.self_test = true;
                }
            }
            None => match self.state {
                ParseState::Expecting { switch, .. } => {
                    *self.config.slot(switch) = Some(token.to_string());
                    self.state = ParseState::Idle;
                }
                ParseState::Idle if looks_like_switch(token) => {
                    return Err(ValidationError::UnrecognizedSwitch {
                        token: token.to_string(),
                    });
                }
                ParseState::Idle => return Err(misplaced(token)),
            },
        }
        Ok(())
    }

    fn finish(self) -> Result<LaunchConfig, ValidationError> {
        if let ParseState::Expecting { token, .. } = self.state {
            return Err(misplaced(token));
        }
        if !self.config.is_informational() {
            if self.config.application_file_path.is_none() {
                return Err(ValidationError::MissingRequired {
                    field: RequiredField::ApplicationFilePath,
                });
            }
            if self.config.reg_file_path.is_none() {
                return Err(ValidationError::MissingRequired {
                    field: RequiredField::RegFilePath,
                });
            }
        }
        Ok(self.config)
    }
}

fn misplaced(token: &str) -> ValidationError {
    ValidationError::MisplacedSwitch {
        token: token.to_string(),
    }
}

/// Validate an ordered token sequence, stopping at the first violation.
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<LaunchConfig, ValidationError> {
    let mut validator = Validator::new();
    for token in tokens {
        validator.step(token.as_ref())?;
    }
    validator.finish()
}
