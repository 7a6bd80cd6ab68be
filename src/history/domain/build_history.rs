use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Build identifier (repository build number or tag)
///
/// Ordered numerically when both sides are unsigned integers, otherwise
/// lexicographically; numeric ids sort before textual ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildId(String);

impl BuildId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for ids made of ASCII digits only, the shape repository builds use
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_digit())
    }

    fn numeric_value(&self) -> Option<u128> {
        if self.is_numeric() {
            self.0.parse().ok()
        } else {
            None
        }
    }
}

impl Ord for BuildId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric_value(), other.numeric_value()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for BuildId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for BuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BuildId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Metadata recorded for a build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    #[serde(default)]
    pub release_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freebsd_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<String>,
}

impl BuildInfo {
    pub fn new(release_date: impl Into<String>) -> Self {
        Self {
            release_date: release_date.into(),
            ..Default::default()
        }
    }
}

/// Versions a package had across builds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersions {
    #[serde(default)]
    pub versions: IndexMap<BuildId, String>,
}

impl PackageVersions {
    /// Version recorded for `build`; a blank entry counts as absent
    pub fn version_at(&self, build: &BuildId) -> Option<&str> {
        self.versions
            .get(build)
            .map(String::as_str)
            .filter(|version| !version.trim().is_empty())
    }
}

/// Build history document: builds with release dates, and per-package versions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildHistory {
    #[serde(default)]
    pub builds: IndexMap<BuildId, BuildInfo>,
    #[serde(default)]
    pub packages: IndexMap<String, PackageVersions>,
}

impl BuildHistory {
    /// Build ids, most recent first
    pub fn builds_descending(&self) -> Vec<&BuildId> {
        let mut ids: Vec<&BuildId> = self.builds.keys().collect();
        ids.sort();
        ids.reverse();
        ids
    }

    pub fn build_count(&self) -> usize {
        self.builds.len()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }
}
