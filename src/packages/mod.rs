//! Composer package discovery.
//!
//! Packages contribute Boost resources from conventional directories inside
//! their install path:
//!
//! - `resources/boost/guidelines`
//! - `resources/boost/skills`
//! - `resources/boost/mcp`
//!
//! Package names come from the project's `composer.json` (`require` first,
//! then `require-dev`, in document order). A missing or unreadable
//! `composer.json` yields no packages.

use crate::constants::{PACKAGE_GUIDELINES_DIR, PACKAGE_MCP_DIR, PACKAGE_SKILLS_DIR};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Enumerates packages that expose an MCP definition directory.
///
/// Implementations return `(package name, directory)` pairs in a stable
/// order; later pairs win when two packages define the same server key.
pub trait PackageDirectories {
    fn mcp_directories(&self) -> Vec<(String, PathBuf)>;
}

/// Package enumeration backed by `composer.json` and the vendor directory.
#[derive(Debug, Clone)]
pub struct ComposerPackages {
    project_root: PathBuf,
    vendor_dir: PathBuf,
}

impl ComposerPackages {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self::with_vendor_dir(project_root, crate::constants::DEFAULT_VENDOR_DIR)
    }

    /// Use a vendor directory other than `vendor`, relative to the project root
    /// unless absolute.
    pub fn with_vendor_dir(project_root: impl Into<PathBuf>, vendor_dir: impl AsRef<Path>) -> Self {
        let project_root = project_root.into();
        let vendor_dir = project_root.join(vendor_dir.as_ref());
        Self {
            project_root,
            vendor_dir,
        }
    }

    /// Names of the required packages, `require` before `require-dev`.
    ///
    /// Platform requirements (`php`, `ext-*`, `lib-*`, `composer-*`) are skipped.
    pub fn package_names(&self) -> Vec<String> {
        let composer_json = self.project_root.join("composer.json");
        let content = match std::fs::read_to_string(&composer_json) {
            Ok(content) => content,
            Err(e) => {
                debug!("Cannot read {}: {}", composer_json.display(), e);
                return Vec::new();
            }
        };

        let document: Value = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) => {
                debug!("Cannot parse {}: {}", composer_json.display(), e);
                return Vec::new();
            }
        };

        let mut names: Vec<String> = Vec::new();
        for section in ["require", "require-dev"] {
            let Some(requirements) = document.get(section).and_then(Value::as_object) else {
                continue;
            };
            for name in requirements.keys() {
                if is_platform_requirement(name) || names.contains(name) {
                    continue;
                }
                names.push(name.clone());
            }
        }
        names
    }

    fn directories_with(&self, relative: &str) -> Vec<(String, PathBuf)> {
        self.package_names()
            .into_iter()
            .map(|name| {
                let path = self.vendor_dir.join(&name).join(relative);
                (name, path)
            })
            .filter(|(_, path)| path.is_dir())
            .collect()
    }

    pub fn guideline_directories(&self) -> Vec<(String, PathBuf)> {
        self.directories_with(PACKAGE_GUIDELINES_DIR)
    }

    pub fn skill_directories(&self) -> Vec<(String, PathBuf)> {
        self.directories_with(PACKAGE_SKILLS_DIR)
    }
}

impl PackageDirectories for ComposerPackages {
    fn mcp_directories(&self) -> Vec<(String, PathBuf)> {
        self.directories_with(PACKAGE_MCP_DIR)
    }
}

// Platform packages have no vendor prefix.
fn is_platform_requirement(name: &str) -> bool {
    !name.contains('/')
}

/// A third-party package and the Boost features it ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirdPartyPackage {
    pub name: String,
    pub has_guidelines: bool,
    pub has_skills: bool,
    pub has_mcp: bool,
}

impl ThirdPartyPackage {
    /// Discover every package that ships at least one Boost feature.
    ///
    /// Packages are listed in the order they are first seen across the
    /// guideline, skill, and MCP enumerations.
    pub fn discover(packages: &ComposerPackages) -> Vec<Self> {
        let guidelines = packages.guideline_directories();
        let skills = packages.skill_directories();
        let mcp = packages.mcp_directories();

        let has = |list: &[(String, PathBuf)], name: &str| list.iter().any(|(n, _)| n == name);

        let mut names: Vec<&str> = Vec::new();
        for (name, _) in guidelines.iter().chain(&skills).chain(&mcp) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }

        names
            .into_iter()
            .map(|name| Self {
                name: name.to_string(),
                has_guidelines: has(&guidelines, name),
                has_skills: has(&skills, name),
                has_mcp: has(&mcp, name),
            })
            .collect()
    }

    /// Comma-separated list of the features this package ships.
    pub fn feature_label(&self) -> String {
        [
            (self.has_guidelines, "guidelines"),
            (self.has_skills, "skills"),
            (self.has_mcp, "mcp"),
        ]
        .into_iter()
        .filter_map(|(present, label)| present.then_some(label))
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.feature_label())
    }
}
