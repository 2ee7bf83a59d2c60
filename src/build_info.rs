//! Build-time information
//!
//! Metadata captured by `build.rs` through vergen: timestamp, cargo target
//! and opt level, compiler version, and git state when available.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.88.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Value vergen emits in place of git metadata it could not collect
const IDEMPOTENT_PLACEHOLDER: &str = "VERGEN_IDEMPOTENT_OUTPUT";

/// Raw git commit SHA as emitted by vergen; prefer [`git_sha`]
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Raw git branch name as emitted by vergen; prefer [`git_branch`]
pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");

/// Raw dirty flag as emitted by vergen; prefer [`is_git_dirty`]
pub const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

/// Drops values vergen filled with its idempotent placeholder
fn known(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|v| !v.is_empty() && *v != IDEMPOTENT_PLACEHOLDER)
}

/// Git commit SHA, `None` outside a git checkout
pub fn git_sha() -> Option<&'static str> {
    known(GIT_SHA)
}

/// Git branch name, `None` outside a git checkout
pub fn git_branch() -> Option<&'static str> {
    known(GIT_BRANCH)
}

fn short_sha(sha: Option<&'static str>) -> &'static str {
    match known(sha) {
        Some(sha) if sha.len() >= 7 => &sha[..7],
        Some(sha) => sha,
        None => "unknown",
    }
}

/// Short (7 character) git SHA, or "unknown"
pub fn git_sha_short() -> &'static str {
    short_sha(GIT_SHA)
}

/// Returns true when the build came from a dirty working tree
pub fn is_git_dirty() -> bool {
    known(GIT_DIRTY) == Some("true")
}

/// Returns a formatted build version string
///
/// Format: `{crate_version}+{sha}-{target_triple}-opt{opt_level}`
pub fn version_string() -> String {
    format!(
        "{}+{}-{}-opt{}",
        env!("CARGO_PKG_VERSION"),
        git_sha_short(),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL
    )
}

/// Returns a detailed build info string
pub fn detailed_info() -> String {
    format!(
        "Built: {}\nGit: {}@{}\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        BUILD_TIMESTAMP,
        git_branch().unwrap_or("unknown"),
        git_sha_short(),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL
    )
}
