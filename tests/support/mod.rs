use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Command for the compiled `vitrine` binary with a clean environment.
pub fn vitrine() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vitrine"));
    cmd.env_remove("VITRINE_PHONE")
        .env_remove("VITRINE_CATALOGS")
        .env_remove("VITRINE_LOG")
        .current_dir(repo_root());
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Write `value` as a catalog payload inside `dir`.
pub fn write_catalog(dir: &TempDir, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

pub fn bundled_catalogs() -> Vec<PathBuf> {
    let root = repo_root();
    vec![
        root.join("catalogs/equipments.json"),
        root.join("catalogs/items.json"),
    ]
}

pub fn catalog_args(cmd: &mut Command, paths: &[impl AsRef<Path>]) {
    for path in paths {
        cmd.arg("--catalog").arg(path.as_ref());
    }
}
