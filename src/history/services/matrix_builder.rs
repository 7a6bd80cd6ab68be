use crate::history::domain::{BuildHistory, MatrixRow, VersionMatrix, PACKAGE_COLUMN, PLACEHOLDER};

/// MatrixBuilder service turning a build history into a packages × builds table
///
/// Pure transformation; no I/O.
pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Builds the version matrix
    ///
    /// Columns are `"Package"` followed by one `"<buildId> (<releaseDate>)"`
    /// label per build, most recent build first. Rows follow the package
    /// mapping's order, one per package, with [`PLACEHOLDER`] for builds that
    /// recorded no version.
    pub fn build(history: &BuildHistory) -> VersionMatrix {
        let builds = history.builds_descending();

        let mut columns = Vec::with_capacity(builds.len() + 1);
        columns.push(PACKAGE_COLUMN.to_string());
        columns.extend(builds.iter().map(|id| {
            let release_date = &history.builds[*id].release_date;
            format!("{} ({})", id, release_date)
        }));

        let rows = history
            .packages
            .iter()
            .map(|(name, package)| {
                let versions = builds
                    .iter()
                    .map(|id| {
                        package
                            .version_at(id)
                            .unwrap_or(PLACEHOLDER)
                            .to_string()
                    })
                    .collect();
                MatrixRow::new(name.clone(), versions)
            })
            .collect();

        VersionMatrix::new(columns, rows)
    }
}
