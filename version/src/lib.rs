// Re-export semver for users of this library
pub use semver::Version as SemverVersion;
use std::path::{Path, PathBuf};
use tracing::debug;

mod error;
mod manifest;
pub use changelog::is_release_version;
pub use error::{Result, ResultExt, VersionError};
pub use manifest::{Manifest, ManifestKind, detect_manifest};

/// Picks the version a release is published under.
///
/// An explicit version is used only when it is a bare `MAJOR.MINOR.PATCH`;
/// anything else silently falls back to `default`. Pre-release and build
/// metadata of the fallback are left out so the result is always a valid
/// release version.
pub fn resolve_release_version(explicit: Option<&str>, default: &SemverVersion) -> String {
    match explicit {
        Some(version) if is_release_version(version) => version.to_string(),
        other => {
            if let Some(rejected) = other {
                debug!(rejected, fallback = %default, "explicit release version rejected");
            }
            format!("{}.{}.{}", default.major, default.minor, default.patch)
        }
    }
}

/// Read the current version from the manifest of the project at `dir_path`
pub fn read_package_version(dir_path: &Path) -> Result<SemverVersion> {
    let manifest = detect_manifest(dir_path)
        .with_context(|| format!("Failed to detect manifest in '{}'", dir_path.display()))?;
    manifest
        .read_version()
        .with_context(|| format!("Failed to read version from {}", manifest.path.display()))
}

/// Nearest directory, starting at `start` and walking up, that holds a
/// supported manifest
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| {
            ManifestKind::ALL
                .iter()
                .any(|kind| dir.join(kind.file_name()).is_file())
        })
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn default_version() -> SemverVersion {
        SemverVersion::parse("1.2.1").unwrap()
    }

    #[test]
    fn valid_explicit_version_is_kept() {
        assert_eq!(
            resolve_release_version(Some("2.11.9"), &default_version()),
            "2.11.9"
        );
    }

    #[test]
    fn four_component_version_falls_back_to_package_version() {
        assert_eq!(
            resolve_release_version(Some("1.0.1.1"), &default_version()),
            "1.2.1"
        );
    }

    #[test]
    fn missing_or_malformed_version_falls_back() {
        for explicit in [None, Some(""), Some("v1.0.0"), Some("1.0")] {
            assert_eq!(resolve_release_version(explicit, &default_version()), "1.2.1");
        }
    }

    #[test]
    fn fallback_drops_prerelease_metadata() {
        let default = SemverVersion::parse("3.0.0-beta.1+build.7").unwrap();
        assert_eq!(resolve_release_version(None, &default), "3.0.0");
    }

    #[test]
    fn project_root_is_found_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nversion = \"0.1.0\"\n").unwrap();
        let nested = dir.path().join("src").join("bin");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested).as_deref(), Some(dir.path()));
        assert_eq!(read_package_version(dir.path()).unwrap().to_string(), "0.1.0");
    }

    #[test]
    fn read_error_carries_context() {
        let dir = TempDir::new().unwrap();
        let err = read_package_version(dir.path()).unwrap_err();
        assert!(err.user_message().starts_with("Failed to detect manifest in"));
    }
}
