use std::env;
use std::path::Path;
use std::process::Command;

const STAMP_VAR: &str = "HOMEVALUE_BUILD_SHA";

fn main() {
    // Source tarballs have no .git; packagers pass the revision in directly
    println!("cargo:rerun-if-env-changed={STAMP_VAR}");
    if let Some(stamp) = env::var(STAMP_VAR).ok().filter(|s| !s.trim().is_empty()) {
        println!("cargo:rustc-env={STAMP_VAR}={}", stamp.trim());
        return;
    }

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let repo_root = Path::new(&manifest_dir).join("..");
    let head = repo_root.join(".git").join("HEAD");
    if head.exists() {
        println!("cargo:rerun-if-changed={}", head.display());
    }

    let stamp = git_short_sha(&repo_root).unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env={STAMP_VAR}={stamp}");
}

fn git_short_sha(repo_root: &Path) -> Option<String> {
    let out = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&out.stdout).trim().to_string();
    (!sha.is_empty()).then_some(sha)
}
