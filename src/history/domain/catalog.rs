use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dependency edge as recorded by the depending package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl DependencyRecord {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            origin: None,
        }
    }
}

/// Catalog entry for a single package
///
/// Fields the browser does not read (`www`, `licenses`, ...) are kept in
/// `extra` so an exported catalog carries the whole dump entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maintainer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub arch: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub deps: IndexMap<String, DependencyRecord>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl PackageRecord {
    pub fn has_dependencies(&self) -> bool {
        !self.deps.is_empty()
    }
}

/// Catalog aggregate: package name → record, in document order
///
/// Loaded once and never mutated afterwards; builders borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    packages: IndexMap<String, PackageRecord>,
}

impl Catalog {
    pub fn new(packages: IndexMap<String, PackageRecord>) -> Self {
        Self { packages }
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Dependency mapping of `name`, or `None` when the package is unknown
    pub fn dependencies_of(&self, name: &str) -> Option<&IndexMap<String, DependencyRecord>> {
        self.packages.get(name).map(|record| &record.deps)
    }

    /// True iff `name` is in the catalog with at least one dependency
    pub fn has_dependencies(&self, name: &str) -> bool {
        self.packages
            .get(name)
            .map(PackageRecord::has_dependencies)
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PackageRecord)> {
        self.packages.iter()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Sorts packages alphabetically, ignoring case
    pub fn sort_by_name(&mut self) {
        self.packages
            .sort_by(|a, _, b, _| a.to_lowercase().cmp(&b.to_lowercase()));
    }
}

impl FromIterator<PackageRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = PackageRecord>>(iter: T) -> Self {
        Self {
            packages: iter
                .into_iter()
                .map(|record| (record.name.clone(), record))
                .collect(),
        }
    }
}
