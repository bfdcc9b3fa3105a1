use std::{path::Path, process::Command};

use anyhow::{bail, Context, Result};

use crate::repo;

const BINARY_NAME: &str = "run-as-registry";

pub fn run(release: bool) -> Result<()> {
    let root = repo::repo_root()?;
    if release {
        repo::run_cargo(&root, "cargo build --release", &["build", "--release"])?;
    } else {
        repo::run_cargo(&root, "cargo build", &["build"])?;
    }
    run_in(&root, release)
}

/// Run `<binary> -T` from `target/` and require every self-test case to pass.
pub fn run_in(root: &Path, release: bool) -> Result<()> {
    let binary = root
        .join("target")
        .join(if release { "release" } else { "debug" })
        .join(format!("{BINARY_NAME}{}", std::env::consts::EXE_SUFFIX));

    let output = Command::new(&binary)
        .arg("-T")
        .current_dir(root)
        .env("RUST_LOG", "warn")
        .output()
        .with_context(|| format!("failed to run {}", binary.display()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        bail!(
            "self-test failed (status {}):\n{stdout}{}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    if !stdout.contains("\"failed\": 0") {
        bail!("self-test output did not report zero failures:\n{stdout}");
    }
    eprintln!("self-test passed");
    Ok(())
}
