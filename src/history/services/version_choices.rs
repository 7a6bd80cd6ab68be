use crate::history::domain::{is_placeholder, MatrixRow};

/// VersionChoices service collecting the versions a package shipped with
pub struct VersionChoices;

impl VersionChoices {
    /// Distinct non-placeholder, non-blank versions of `package_name`, in first-seen order
    ///
    /// Scans every rendered row whose name cell equals `package_name`; values
    /// are compared as plain strings.
    pub fn collect(rows: &[MatrixRow], package_name: &str) -> Vec<String> {
        let mut choices: Vec<String> = Vec::new();

        for row in rows
            .iter()
            .filter(|row| row.package_name() == package_name)
        {
            for version in row.versions() {
                if !is_placeholder(version)
                    && !version.trim().is_empty()
                    && !choices.contains(version)
                {
                    choices.push(version.clone());
                }
            }
        }

        choices
    }
}
