use std::path::Path;

use tracing::{debug, info};

use super::{ConfigOrigin, LauncherConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_source(path: &Path, origin: ConfigOrigin) {
    match origin {
        ConfigOrigin::Environment => info!(
            target: "run_as_registry::config",
            path = %path.display(),
            "Loading configuration using RUN_AS_REGISTRY_CONFIG environment variable"
        ),
        ConfigOrigin::CommandLine => info!(
            target: "run_as_registry::config",
            path = %path.display(),
            "Loading configuration from --config"
        ),
        ConfigOrigin::Default => debug!(
            target: "run_as_registry::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "RUN_AS_REGISTRY_CONFIG not set; using default run-as-registry.toml"
        ),
    }
}

pub fn log_defaults(path: &Path) {
    debug!(
        target: "run_as_registry::config",
        path = %path.display(),
        "Configuration file not found; using built-in defaults"
    );
}

pub fn log_loaded(config: &LauncherConfig) {
    info!(
        target: "run_as_registry::config",
        path = %config
            .source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        regedit = %config.regedit.path.display(),
        silent_switch = %config.regedit.silent_switch,
        has_profile = config.profile.is_some(),
        "Configuration file loaded successfully"
    );
}
