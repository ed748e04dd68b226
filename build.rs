use std::process::Command;

/// Short commit hash reported by the service index, "unknown" outside a
/// git checkout. `CATALOGUE_BUILD_HASH` takes precedence for packaged builds.
fn build_hash() -> String {
    if let Ok(hash) = std::env::var("CATALOGUE_BUILD_HASH") {
        if !hash.trim().is_empty() {
            return hash.trim().to_string();
        }
    }

    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", build_hash());

    println!("cargo:rerun-if-env-changed=CATALOGUE_BUILD_HASH");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}
