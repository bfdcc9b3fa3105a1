use std::path::Path;

use tracing::{debug, info};

use crate::{
    config::RegeditSection,
    lib::{
        errors::LaunchError,
        paths::executable_name,
        process::{
            build_application_command, build_instance_probe_command, build_registry_import_command,
            probe_found_instance, ApplicationRequest, RegistryImportRequest,
        },
    },
};

use super::{ImportStatus, LaunchPlan, ProcessLauncher};

/// [`ProcessLauncher`] backed by real child processes.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    regedit: RegeditSection,
}

impl SystemLauncher {
    pub fn new(regedit: RegeditSection) -> Self {
        Self { regedit }
    }
}

impl ProcessLauncher for SystemLauncher {
    async fn is_running(&self, application_file_path: &Path) -> Result<bool, LaunchError> {
        let Some(name) = executable_name(application_file_path) else {
            return Ok(false);
        };

        let output = build_instance_probe_command(&name)
            .output()
            .await
            .map_err(|source| LaunchError::InstanceProbe { source })?;
        let found = probe_found_instance(&name, &output);
        debug!(
            target: "run_as_registry::launcher",
            executable = %name,
            found,
            "Checked for a running instance"
        );
        Ok(found)
    }

    async fn import_registry(&self, reg_file_path: &Path) -> Result<ImportStatus, LaunchError> {
        info!(
            target: "run_as_registry::launcher",
            regedit = %self.regedit.path.display(),
            silent_switch = %self.regedit.silent_switch,
            reg_file = %reg_file_path.display(),
            "Starting registry import"
        );

        let status = build_registry_import_command(RegistryImportRequest {
            regedit_path: &self.regedit.path,
            silent_switch: &self.regedit.silent_switch,
            reg_file_path,
        })
        .status()
        .await
        .map_err(|source| LaunchError::ImportSpawn {
            program: self.regedit.path.clone(),
            source,
        })?;

        Ok(ImportStatus {
            success: status.success(),
            exit_code: status.code(),
        })
    }

    async fn start_application(&self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        let child = build_application_command(ApplicationRequest {
            application_file_path: &plan.application_file_path,
            arguments: plan.arguments.as_deref(),
            working_folder_path: plan.working_folder_path.as_deref(),
        })
        .spawn()
        .map_err(|source| LaunchError::ApplicationSpawn {
            path: plan.application_file_path.clone(),
            source,
        })?;

        debug!(
            target: "run_as_registry::launcher",
            pid = child.id(),
            "Spawned application process"
        );
        Ok(())
    }
}
