//! CLI argument definitions and `LaunchRequest` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_source, LaunchRequest, OutputMode, SwitchSource};

/// Command-line arguments.
///
/// Options must come before the first switch; everything from the first
/// switch on belongs to the launcher grammar, including `-h` and `-?`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "run-as-registry",
    version,
    about = "Import a .reg file silently, then start an application",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LauncherArgs {
    /// Path to the configuration file (overrides RUN_AS_REGISTRY_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Raw command line to tokenize instead of SWITCHES.
    #[arg(long = "command-line", value_name = "STRING", conflicts_with = "switches")]
    pub command_line: Option<String>,
    /// Print the canonical command line instead of launching.
    #[arg(long, default_value_t = false, conflicts_with = "save_profile")]
    pub print: bool,
    /// Write the validated settings to a `[profile]` TOML file instead of launching.
    #[arg(long = "save-profile", value_name = "PATH")]
    pub save_profile: Option<PathBuf>,
    /// Launcher switches: -i <APP> [-a <ARGS>] [-w <FOLDER>] [-o] -r <REG>, or -h, or -T.
    #[arg(
        value_name = "SWITCHES",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub switches: Vec<String>,
}

impl LauncherArgs {
    /// Resolve the configuration location and where the switches come from.
    pub fn into_request(self) -> Result<LaunchRequest> {
        let config = resolve_config_source(self.config_override)?;

        let switches = match (self.command_line, self.switches.is_empty()) {
            (Some(raw), _) => SwitchSource::CommandLine(raw),
            (None, false) => SwitchSource::Arguments(self.switches),
            (None, true) => SwitchSource::Profile,
        };

        let output = match (self.print, self.save_profile) {
            (_, Some(path)) => OutputMode::SaveProfile(path),
            (true, None) => OutputMode::Print,
            (false, None) => OutputMode::Launch,
        };

        Ok(LaunchRequest {
            config,
            switches,
            output,
        })
    }
}
