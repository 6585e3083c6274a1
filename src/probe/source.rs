//! Source location normalization

/// Host whose repository roots are rewritten to a default-branch archive
pub const GITHUB_HOST: &str = "github.com";

/// Suffix appended to a repository root to download its default branch
pub const DEFAULT_BRANCH_ARCHIVE: &str = "/archive/main.tar.gz";

const ARCHIVE_SUFFIXES: &[&str] = &[".tar.gz", ".tgz", ".zip"];

pub fn is_archive_reference(location: &str) -> bool {
    ARCHIVE_SUFFIXES
        .iter()
        .any(|suffix| location.ends_with(suffix))
}

/// Maps a hosted repository root to its default-branch archive URL.
///
/// Locations on other hosts, and explicit archive references, are returned
/// unchanged; if they cannot be fetched the probe simply yields no signal.
pub fn normalize_location(location: &str) -> String {
    let location = location.trim();
    if location.contains(GITHUB_HOST) && !is_archive_reference(location) {
        format!(
            "{}{}",
            location.trim_end_matches('/'),
            DEFAULT_BRANCH_ARCHIVE
        )
    } else {
        location.to_string()
    }
}
