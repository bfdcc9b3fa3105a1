use std::{fs, path::Path, process::ExitCode};

use anyhow::{anyhow, Context, Error};
use tracing::info;

use crate::{
    cli::{ConfigSource, LaunchRequest, OutputMode, SwitchSource},
    config::{LauncherConfig, RawProfileSection},
    launcher::{self, LaunchOutcome, LaunchPlan, SystemLauncher},
    lib::errors::ValidationError,
    parser::{render_command_line, ArgumentParser, LaunchConfig},
};

use super::{help::help_text, self_test::run_self_test};

/// Exit code used when the command line is rejected.
pub const VALIDATION_EXIT_CODE: u8 = 2;

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn validation(err: ValidationError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: ExitCode::from(VALIDATION_EXIT_CODE),
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Load the configuration, validate the switches and act on them.
pub async fn run(request: LaunchRequest) -> Result<(), RuntimeExit> {
    let config = load_config(&request.config)?;
    let launch_config = parse_switches(&request.switches, &config)?;

    if launch_config.help {
        print!("{}", help_text());
        return Ok(());
    }
    if launch_config.self_test {
        return self_test();
    }

    match request.output {
        OutputMode::Print => {
            let rendered = render_command_line(&launch_config).map_err(RuntimeExit::from_error)?;
            println!("{rendered}");
            Ok(())
        }
        OutputMode::SaveProfile(path) => save_profile(&launch_config, &path),
        OutputMode::Launch => start(&launch_config, config).await,
    }
}

fn load_config(source: &ConfigSource) -> Result<LauncherConfig, RuntimeExit> {
    LauncherConfig::load(source.path.clone(), source.origin).map_err(RuntimeExit::from_error)
}

fn parse_switches(
    source: &SwitchSource,
    config: &LauncherConfig,
) -> Result<LaunchConfig, RuntimeExit> {
    let mut parser = ArgumentParser::new();
    let parsed = match source {
        SwitchSource::Arguments(arguments) => parser.parse_arguments(arguments.iter().cloned()),
        SwitchSource::CommandLine(raw) => parser.parse_command_line(raw),
        SwitchSource::Profile => {
            let arguments = match &config.profile {
                Some(profile) => profile
                    .build_arguments()
                    .context("saved profile cannot be launched")
                    .map_err(RuntimeExit::from_error)?,
                None => Vec::new(),
            };
            info!(
                target: "run_as_registry::runtime",
                from_profile = config.profile.is_some(),
                "No switches given; using the configuration profile"
            );
            parser.parse_arguments(arguments)
        }
    };
    parsed.cloned().map_err(RuntimeExit::validation)
}

fn self_test() -> Result<(), RuntimeExit> {
    let report = run_self_test();
    let rendered = serde_json::to_string_pretty(&report).map_err(RuntimeExit::from_error)?;
    println!("{rendered}");
    if report.is_success() {
        Ok(())
    } else {
        Err(RuntimeExit::from_error(anyhow!(
            "self-test failed: {} of {} cases did not match",
            report.failed,
            report.failed + report.passed
        )))
    }
}

fn save_profile(launch_config: &LaunchConfig, path: &Path) -> Result<(), RuntimeExit> {
    let document = RawProfileSection::from_launch_config(launch_config)
        .to_toml()
        .context("failed to serialize profile")
        .map_err(RuntimeExit::from_error)?;
    fs::write(path, document)
        .with_context(|| format!("failed to write profile to {}", path.display()))
        .map_err(RuntimeExit::from_error)?;
    info!(
        target: "run_as_registry::runtime",
        path = %path.display(),
        "Profile saved"
    );
    Ok(())
}

async fn start(launch_config: &LaunchConfig, config: LauncherConfig) -> Result<(), RuntimeExit> {
    let plan = LaunchPlan::from_config(launch_config).map_err(RuntimeExit::from_error)?;
    let system = SystemLauncher::new(config.regedit);
    match launcher::launch(&system, &plan)
        .await
        .map_err(RuntimeExit::from_error)?
    {
        LaunchOutcome::AlreadyRunning => info!(
            target: "run_as_registry::runtime",
            application = %plan.application_file_path.display(),
            "Nothing to do; application already running"
        ),
        LaunchOutcome::Started { import } => info!(
            target: "run_as_registry::runtime",
            application = %plan.application_file_path.display(),
            import_success = import.success,
            "Launch complete"
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::config::ConfigOrigin;

    fn request(dir: &Path, switches: SwitchSource, output: OutputMode) -> LaunchRequest {
        LaunchRequest {
            config: ConfigSource {
                path: dir.join("absent.toml"),
                origin: ConfigOrigin::Default,
            },
            switches,
            output,
        }
    }

    fn arguments(tokens: &[&str]) -> SwitchSource {
        SwitchSource::Arguments(tokens.iter().map(|token| token.to_string()).collect())
    }

    #[tokio::test]
    async fn rejected_switches_use_the_validation_exit_code() {
        let temp = tempdir().expect("can create temporary directory");
        let exit = run(request(temp.path(), arguments(&["-T", "-o"]), OutputMode::Print))
            .await
            .expect_err("-T -o is rejected");

        assert_eq!(exit.exit_code(), ExitCode::from(VALIDATION_EXIT_CODE));
        assert!(exit.message().contains("-o"), "{}", exit.message());
    }

    #[tokio::test]
    async fn no_switches_and_no_profile_is_missing_application() {
        let temp = tempdir().expect("can create temporary directory");
        let exit = run(request(temp.path(), SwitchSource::Profile, OutputMode::Launch))
            .await
            .expect_err("nothing to launch");

        assert_eq!(exit.message(), "Missing required application file path (-i)");
    }

    #[tokio::test]
    async fn save_profile_writes_a_loadable_profile() {
        let temp = tempdir().expect("can create temporary directory");
        let target = temp.path().join("saved.toml");

        run(request(
            temp.path(),
            SwitchSource::CommandLine(r#"-i "C:\App\app.exe" -a "/q" -o -r C:\App\app.reg"#.into()),
            OutputMode::SaveProfile(target.clone()),
        ))
        .await
        .expect("profile is saved");

        let loaded = LauncherConfig::load_from_path(target).expect("saved profile loads");
        let profile = loaded.profile.expect("profile section written");
        assert_eq!(profile.arguments.as_deref(), Some("/q"));
        assert!(profile.one_instance);
    }

    #[tokio::test]
    async fn help_wins_before_any_output_mode() {
        let temp = tempdir().expect("can create temporary directory");
        run(request(
            temp.path(),
            arguments(&["/?"]),
            OutputMode::SaveProfile(temp.path().join("unused.toml")),
        ))
        .await
        .expect("help succeeds");

        assert!(!temp.path().join("unused.toml").exists());
    }
}
