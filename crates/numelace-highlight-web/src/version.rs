//! Version string logged when the highlighter starts.

/// Returns `pkg_version (git_hash)` for the highlighter build.
///
/// Builds without git metadata, e.g. from a source tarball, report `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}
