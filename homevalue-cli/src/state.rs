use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$HOMEVALUE_HOME`, or `~/.homevalue`
pub fn homevalue_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("HOMEVALUE_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set (or set HOMEVALUE_HOME)")?;
    Ok(PathBuf::from(home).join(".homevalue"))
}

pub fn ensure_homevalue_home() -> Result<PathBuf> {
    let dir = homevalue_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
