#[path = "integration/common.rs"]
mod common;

#[path = "integration/command_line.rs"]
mod command_line;

#[path = "integration/cli_binary.rs"]
mod cli_binary;

#[path = "integration/profile_launch.rs"]
mod profile_launch;
