use crate::error::{Result, VersionError};
use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version as SemverVersion;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

static SETUP_PY_VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"version\s*=\s*['"]([0-9]+\.[0-9]+\.[0-9]+)['"]"#)
        .expect("Failed to compile setup.py version regex")
});

/// Package manifests a project version can be read from, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    PackageJson, // package.json
    CargoToml,   // Cargo.toml
    PyProject,   // pyproject.toml
    SetupPy,     // setup.py
}

impl ManifestKind {
    pub const ALL: [ManifestKind; 4] = [
        Self::PackageJson,
        Self::CargoToml,
        Self::PyProject,
        Self::SetupPy,
    ];

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::CargoToml => "Cargo.toml",
            Self::PyProject => "pyproject.toml",
            Self::SetupPy => "setup.py",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A manifest found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub kind: ManifestKind,
    pub path: PathBuf,
}

/// Finds the first supported manifest directly inside `dir_path`
pub fn detect_manifest(dir_path: &Path) -> Result<Manifest> {
    if !dir_path.is_dir() {
        return Err(VersionError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory not found: {}", dir_path.display()),
        )));
    }

    ManifestKind::ALL
        .into_iter()
        .map(|kind| Manifest {
            kind,
            path: dir_path.join(kind.file_name()),
        })
        .find(|manifest| manifest.path.is_file())
        .ok_or_else(|| VersionError::NoManifestDetected(dir_path.to_path_buf()))
}

impl Manifest {
    /// Reads the `version` declared by this manifest
    pub fn read_version(&self) -> Result<SemverVersion> {
        let content = fs::read_to_string(&self.path)?;
        let raw = match self.kind {
            ManifestKind::PackageJson => version_from_package_json(&content)?,
            ManifestKind::CargoToml => version_from_cargo_toml(&content)?,
            ManifestKind::PyProject => version_from_pyproject(&content)?,
            ManifestKind::SetupPy => version_from_setup_py(&content)?,
        };
        Ok(SemverVersion::parse(raw.trim())?)
    }
}

#[derive(Deserialize, Debug)]
struct PackageJson {
    version: Option<String>,
}

fn version_from_package_json(content: &str) -> Result<String> {
    let package_json: PackageJson =
        serde_json::from_str(content).map_err(|e| malformed(ManifestKind::PackageJson, e))?;
    package_json
        .version
        .ok_or(VersionError::MissingVersion(ManifestKind::PackageJson))
}

fn version_from_cargo_toml(content: &str) -> Result<String> {
    let cargo_toml: toml::Table =
        toml::from_str(content).map_err(|e| malformed(ManifestKind::CargoToml, e))?;

    cargo_toml
        .get("package")
        .and_then(|p| p.as_table())
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .map(ToString::to_string)
        .ok_or(VersionError::MissingVersion(ManifestKind::CargoToml))
}

fn version_from_pyproject(content: &str) -> Result<String> {
    let pyproject: toml::Table =
        toml::from_str(content).map_err(|e| malformed(ManifestKind::PyProject, e))?;

    let pep621_version = pyproject
        .get("project")
        .and_then(|p| p.as_table())
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str());

    pep621_version
        .or_else(|| {
            pyproject
                .get("tool")
                .and_then(|t| t.as_table())
                .and_then(|t| t.get("poetry"))
                .and_then(|p| p.as_table())
                .and_then(|p| p.get("version"))
                .and_then(|v| v.as_str())
        })
        .map(ToString::to_string)
        .ok_or(VersionError::MissingVersion(ManifestKind::PyProject))
}

fn version_from_setup_py(content: &str) -> Result<String> {
    SETUP_PY_VERSION_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(VersionError::MissingVersion(ManifestKind::SetupPy))
}

fn malformed(kind: ManifestKind, err: impl std::fmt::Display) -> VersionError {
    VersionError::MalformedManifest {
        kind,
        reason: err.to_string(),
    }
}
