use crate::history::domain::{BuildHistory, BuildId, BuildInfo, Catalog, PackageVersions};
use crate::shared::error::HistoryError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated metadata of the build being merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    build: BuildId,
    info: BuildInfo,
}

impl BuildMetadata {
    /// # Errors
    /// Returns [`HistoryError::InvalidBuildMetadata`] if the build id is not
    /// all digits or the release date is not `YYYY-MM-DD`.
    pub fn new(
        build: &str,
        release_date: &str,
        freebsd_version: Option<String>,
        packages_count: Option<String>,
        update_date: NaiveDate,
    ) -> Result<Self, HistoryError> {
        let build = BuildId::new(build.trim());
        if !build.is_numeric() {
            return Err(HistoryError::InvalidBuildMetadata {
                field: "build",
                value: build.to_string(),
            });
        }

        let release_date = release_date.trim();
        if NaiveDate::parse_from_str(release_date, DATE_FORMAT).is_err() {
            return Err(HistoryError::InvalidBuildMetadata {
                field: "release_date",
                value: release_date.to_string(),
            });
        }

        Ok(Self {
            build,
            info: BuildInfo {
                release_date: release_date.to_string(),
                freebsd_version,
                packages_count,
                update_date: Some(update_date.format(DATE_FORMAT).to_string()),
            },
        })
    }

    pub fn build(&self) -> &BuildId {
        &self.build
    }

    pub fn info(&self) -> &BuildInfo {
        &self.info
    }
}

/// Counts reported after a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub build_added: bool,
    pub packages_added: usize,
    pub versions_added: usize,
    pub versions_unchanged: usize,
}

/// HistoryMerger service integrating one build's catalog into the history
pub struct HistoryMerger;

impl HistoryMerger {
    /// Records every catalog package's version under `metadata.build()`
    ///
    /// - A new build is inserted first in `builds`; an existing one is kept as is.
    /// - Versions already recorded for the build are never overwritten.
    /// - Each touched package's versions are re-sorted newest first, and the
    ///   package mapping is sorted by name, ignoring case.
    pub fn merge(
        history: &mut BuildHistory,
        catalog: &Catalog,
        metadata: &BuildMetadata,
    ) -> MergeSummary {
        let mut summary = MergeSummary::default();
        let build = metadata.build();

        if !history.builds.contains_key(build) {
            history
                .builds
                .shift_insert(0, build.clone(), metadata.info().clone());
            summary.build_added = true;
            tracing::debug!(build = %build, "added build");
        }

        for (name, record) in catalog.iter() {
            match history.packages.get_mut(name) {
                None => {
                    let mut versions = PackageVersions::default();
                    versions.versions.insert(build.clone(), record.version.clone());
                    history.packages.insert(name.clone(), versions);
                    summary.packages_added += 1;
                    summary.versions_added += 1;
                    tracing::debug!(package = %name, version = %record.version, "added package");
                }
                Some(existing) if existing.version_at(build).is_some() => {
                    summary.versions_unchanged += 1;
                }
                Some(existing) => {
                    existing
                        .versions
                        .insert(build.clone(), record.version.clone());
                    existing.versions.sort_by(|a, _, b, _| b.cmp(a));
                    summary.versions_added += 1;
                }
            }
        }

        history
            .packages
            .sort_by(|a, _, b, _| a.to_lowercase().cmp(&b.to_lowercase()));

        summary
    }
}
