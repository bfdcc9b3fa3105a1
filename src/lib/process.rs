//! Shared helpers for building the registry import, application and probe commands.

use std::{path::Path, process::Stdio};

use tokio::process::Command;

pub struct RegistryImportRequest<'a> {
    pub regedit_path: &'a Path,
    pub silent_switch: &'a str,
    pub reg_file_path: &'a Path,
}

pub struct ApplicationRequest<'a> {
    pub application_file_path: &'a Path,
    pub arguments: Option<&'a str>,
    pub working_folder_path: Option<&'a Path>,
}

/// Build `<regedit> <silent switch> <reg file>`.
pub fn build_registry_import_command(request: RegistryImportRequest<'_>) -> Command {
    let mut command = Command::new(request.regedit_path);
    command
        .arg(request.silent_switch)
        .arg(request.reg_file_path)
        .stdin(Stdio::null());
    command
}

/// Build the target application command. The argument string is passed on
/// verbatim where the platform allows it.
pub fn build_application_command(request: ApplicationRequest<'_>) -> Command {
    let mut command = Command::new(request.application_file_path);
    if let Some(arguments) = request.arguments.filter(|value| !value.is_empty()) {
        append_arguments(&mut command, arguments);
    }
    if let Some(folder) = request
        .working_folder_path
        .filter(|path| !path.as_os_str().is_empty())
    {
        command.current_dir(folder);
    }
    command
}

#[cfg(windows)]
fn append_arguments(command: &mut Command, arguments: &str) {
    command.raw_arg(arguments);
}

#[cfg(not(windows))]
fn append_arguments(command: &mut Command, arguments: &str) {
    command.args(crate::parser::tokenize(arguments));
}

/// Build a process-list query for an executable name.
#[cfg(windows)]
pub fn build_instance_probe_command(executable_name: &str) -> Command {
    let mut command = Command::new("tasklist");
    command
        .arg("/FI")
        .arg(format!("IMAGENAME eq {executable_name}"))
        .arg("/NH")
        .arg("/FO")
        .arg("CSV")
        .stdin(Stdio::null());
    command
}

/// Build a process-list query for an executable name.
#[cfg(not(windows))]
pub fn build_instance_probe_command(executable_name: &str) -> Command {
    let mut command = Command::new("pgrep");
    command.arg("-x").arg(executable_name).stdin(Stdio::null());
    command
}

/// Interpret the probe output. `tasklist` always exits 0, so its CSV rows are
/// searched for the quoted image name; `pgrep` reports through its exit code.
pub fn probe_found_instance(executable_name: &str, output: &std::process::Output) -> bool {
    if cfg!(windows) {
        let needle = format!("\"{}\"", executable_name.to_lowercase());
        String::from_utf8_lossy(&output.stdout)
            .to_lowercase()
            .lines()
            .any(|line| line.starts_with(&needle))
    } else {
        output.status.success()
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    fn args_of(command: &Command) -> Vec<&OsStr> {
        command.as_std().get_args().collect()
    }

    #[test]
    fn registry_import_runs_silently_against_the_file() {
        let command = build_registry_import_command(RegistryImportRequest {
            regedit_path: Path::new("regedit.exe"),
            silent_switch: "/s",
            reg_file_path: Path::new("C:/App/app reg.reg"),
        });

        assert_eq!(command.as_std().get_program(), OsStr::new("regedit.exe"));
        assert_eq!(
            args_of(&command),
            vec![OsStr::new("/s"), OsStr::new("C:/App/app reg.reg")]
        );
    }

    #[test]
    fn application_command_sets_working_folder() {
        let command = build_application_command(ApplicationRequest {
            application_file_path: Path::new("/opt/app/app"),
            arguments: None,
            working_folder_path: Some(Path::new("/opt/app")),
        });

        assert_eq!(command.as_std().get_program(), OsStr::new("/opt/app/app"));
        assert!(args_of(&command).is_empty());
        assert_eq!(command.as_std().get_current_dir(), Some(Path::new("/opt/app")));
    }

    #[test]
    fn empty_working_folder_is_ignored() {
        let command = build_application_command(ApplicationRequest {
            application_file_path: Path::new("app"),
            arguments: Some(""),
            working_folder_path: Some(Path::new("")),
        });

        assert!(args_of(&command).is_empty());
        assert_eq!(command.as_std().get_current_dir(), None);
    }

    #[cfg(not(windows))]
    #[test]
    fn application_arguments_are_split_with_the_tokenizer() {
        let command = build_application_command(ApplicationRequest {
            application_file_path: Path::new("app"),
            arguments: Some(r#"/silent "/log file.txt""#),
            working_folder_path: None,
        });

        assert_eq!(
            args_of(&command),
            vec![OsStr::new("/silent"), OsStr::new("/log file.txt")]
        );
    }
}
