//! CLI entrypoint module structure.
pub mod args;
pub mod request;

pub use args::LauncherArgs;
pub use request::{resolve_config_source, ConfigSource, LaunchRequest, OutputMode, SwitchSource};
