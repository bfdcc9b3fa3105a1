//! Registry import followed by the application launch.
//!
//! The OS side effects sit behind [`ProcessLauncher`]; [`launch`] only decides
//! what happens in which order.
use std::path::{Path, PathBuf};

use tracing::{info, warn, Instrument};

use crate::{
    lib::{errors::LaunchError, telemetry::LaunchSpan},
    parser::{LaunchConfig, RequiredField},
};

mod system;

pub use system::SystemLauncher;

/// Everything needed to perform one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub application_file_path: PathBuf,
    pub arguments: Option<String>,
    pub working_folder_path: Option<PathBuf>,
    pub reg_file_path: PathBuf,
    pub one_instance: bool,
}

impl LaunchPlan {
    pub fn from_config(config: &LaunchConfig) -> Result<Self, LaunchError> {
        let application_file_path =
            config
                .application_file_path
                .as_ref()
                .ok_or(LaunchError::Incomplete {
                    field: RequiredField::ApplicationFilePath,
                })?;
        let reg_file_path = config
            .reg_file_path
            .as_ref()
            .ok_or(LaunchError::Incomplete {
                field: RequiredField::RegFilePath,
            })?;

        Ok(Self {
            application_file_path: PathBuf::from(application_file_path),
            arguments: config.application_arguments.clone(),
            working_folder_path: config.working_folder_path.as_ref().map(PathBuf::from),
            reg_file_path: PathBuf::from(reg_file_path),
            one_instance: config.one_instance,
        })
    }
}

/// How the registry import helper finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStatus {
    pub success: bool,
    pub exit_code: Option<i32>,
}

/// Result of a launch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// `one_instance` was requested and the application is already running.
    AlreadyRunning,
    Started { import: ImportStatus },
}

/// OS-facing operations used by [`launch`].
#[allow(async_fn_in_trait)]
pub trait ProcessLauncher {
    /// Whether an instance of the application is already running.
    async fn is_running(&self, application_file_path: &Path) -> Result<bool, LaunchError>;
    /// Run the registry import and wait for it to exit.
    async fn import_registry(&self, reg_file_path: &Path) -> Result<ImportStatus, LaunchError>;
    /// Start the application without waiting for it.
    async fn start_application(&self, plan: &LaunchPlan) -> Result<(), LaunchError>;
}

/// Import the registry file, then start the application.
pub async fn launch<L: ProcessLauncher>(
    launcher: &L,
    plan: &LaunchPlan,
) -> Result<LaunchOutcome, LaunchError> {
    let span = LaunchSpan::start(&plan.application_file_path.to_string_lossy());
    let result = run_launch(launcher, plan)
        .instrument(span.span().clone())
        .await;
    span.finish(match &result {
        Ok(LaunchOutcome::AlreadyRunning) => "already_running",
        Ok(LaunchOutcome::Started { .. }) => "started",
        Err(_) => "failed",
    });
    result
}

async fn run_launch<L: ProcessLauncher>(
    launcher: &L,
    plan: &LaunchPlan,
) -> Result<LaunchOutcome, LaunchError> {
    if plan.one_instance {
        match launcher.is_running(&plan.application_file_path).await {
            Ok(true) => {
                info!(
                    target: "run_as_registry::launcher",
                    application = %plan.application_file_path.display(),
                    "Application already running; skipping launch"
                );
                return Ok(LaunchOutcome::AlreadyRunning);
            }
            Ok(false) => {}
            Err(err) => warn!(
                target: "run_as_registry::launcher",
                reason = %err,
                "Could not check for a running instance; launching anyway"
            ),
        }
    }

    let import = launcher.import_registry(&plan.reg_file_path).await?;
    if import.success {
        info!(
            target: "run_as_registry::launcher",
            reg_file = %plan.reg_file_path.display(),
            "Registry file imported"
        );
    } else {
        warn!(
            target: "run_as_registry::launcher",
            reg_file = %plan.reg_file_path.display(),
            exit_code = import.exit_code,
            "Registry import exited abnormally; starting application anyway"
        );
    }

    launcher.start_application(plan).await?;
    info!(
        target: "run_as_registry::launcher",
        application = %plan.application_file_path.display(),
        working_folder = ?plan.working_folder_path,
        "Application started"
    );
    Ok(LaunchOutcome::Started { import })
}
