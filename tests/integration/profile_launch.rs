use std::{fs, path::PathBuf};

use run_as_registry::{
    config::{ConfigOrigin, LauncherConfig},
    parser::ArgumentParser,
};
use tempfile::tempdir;

use crate::common::{run_binary, stderr_of};

fn write_profile_config(dir: &std::path::Path, regedit: &str, application: &str) -> PathBuf {
    let reg_file = dir.join("settings.reg");
    fs::write(&reg_file, "Windows Registry Editor Version 5.00\r\n").expect("can write reg file");

    let config_path = dir.join("run-as-registry.toml");
    let document = format!(
        "[regedit]\npath = '{regedit}'\nsilent_switch = \"/s\"\n\n\
         [profile]\napplication_file_path = '{application}'\narguments = \"--flag value\"\n\
         working_folder_path = '{folder}'\nreg_file_path = '{reg}'\n",
        folder = dir.display(),
        reg = reg_file.display(),
    );
    fs::write(&config_path, document).expect("can write config");
    config_path
}

#[test]
fn saved_profile_validates_like_a_command_line() {
    let temp = tempdir().expect("can create temporary directory");
    let application = temp.path().join("app.exe");
    fs::write(&application, b"").expect("can write application stand-in");
    let config_path =
        write_profile_config(temp.path(), "regedit.exe", &application.display().to_string());

    let config =
        LauncherConfig::load(config_path, ConfigOrigin::CommandLine).expect("config loads");
    let arguments = config
        .profile
        .expect("profile present")
        .build_arguments()
        .expect("all referenced files exist");

    let mut parser = ArgumentParser::new();
    let launch = parser.parse_arguments(arguments).expect("profile arguments validate");
    assert_eq!(launch.application_arguments.as_deref(), Some("--flag value"));
    assert_eq!(
        launch.working_folder_path.as_deref(),
        Some(temp.path().display().to_string().as_str())
    );
}

#[test]
fn profile_pointing_at_a_missing_application_fails() {
    let temp = tempdir().expect("can create temporary directory");
    write_profile_config(
        temp.path(),
        "regedit.exe",
        &temp.path().join("gone.exe").display().to_string(),
    );

    let output = run_binary(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1), "{output:?}");
    assert!(stderr_of(&output).contains("was not found"), "{}", stderr_of(&output));
}

#[cfg(unix)]
#[test]
fn default_config_profile_launches_with_stand_in_processes() {
    let Some(stand_in) = ["/bin/true", "/usr/bin/true"]
        .into_iter()
        .find(|path| std::path::Path::new(path).is_file())
    else {
        eprintln!("Skipping launch test because no `true` binary was found");
        return;
    };

    let temp = tempdir().expect("can create temporary directory");
    write_profile_config(temp.path(), stand_in, stand_in);

    let output = run_binary(temp.path(), &[]);

    assert!(output.status.success(), "{}", stderr_of(&output));
}
