use std::path::Path;

use anyhow::Result;

use crate::{cmd::smoke, repo};

const STEPS: &[(&str, &[&str])] = &[
    ("cargo fetch", &["fetch"]),
    ("cargo check --all-targets", &["check", "--all-targets"]),
    ("cargo test --all", &["test", "--all"]),
    ("cargo fmt -- --check", &["fmt", "--", "--check"]),
    (
        "cargo clippy --all-targets -- -D warnings",
        &["clippy", "--all-targets", "--", "-D", "warnings"],
    ),
    ("cargo build --release", &["build", "--release"]),
];

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    for (label, args) in STEPS {
        repo::run_cargo(&root, label, args)?;
    }
    run_smoke(&root)
}

fn run_smoke(root: &Path) -> Result<()> {
    eprintln!("==> run-as-registry -T (release)");
    smoke::run_in(root, true)
}
