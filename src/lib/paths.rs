//! Shared path helpers.

use std::path::Path;

/// File name used to look up a running instance of `path`.
pub fn executable_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.trim().is_empty())
}

/// Returns true if the path is non-empty and names an existing directory.
pub fn is_existing_dir(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_dir()
}
