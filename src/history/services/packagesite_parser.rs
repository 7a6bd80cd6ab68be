use crate::history::domain::{Catalog, PackageRecord};
use crate::shared::error::HistoryError;

/// PackagesiteParser service reading a repository's `packagesite.yaml` dump
///
/// Despite its extension the dump is a stream of JSON objects, one package
/// per object, separated by newlines.
pub struct PackagesiteParser;

impl PackagesiteParser {
    /// Parses the dump into a catalog keyed by package name, sorted by name
    ///
    /// # Arguments
    /// * `content` - Raw dump content
    /// * `location` - Where the content came from, used in error messages
    pub fn parse(content: &str, location: &str) -> Result<Catalog, HistoryError> {
        let records = serde_json::Deserializer::from_str(content)
            .into_iter::<PackageRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| HistoryError::Parse {
                location: location.to_string(),
                details: e.to_string(),
            })?;

        if let Some(index) = records.iter().position(|r| r.name.trim().is_empty()) {
            return Err(HistoryError::Parse {
                location: location.to_string(),
                details: format!("package entry #{} has no name", index + 1),
            });
        }
        if let Some(record) = records.iter().find(|r| r.version.trim().is_empty()) {
            return Err(HistoryError::Parse {
                location: location.to_string(),
                details: format!("package '{}' has no version", record.name),
            });
        }

        let mut catalog: Catalog = records.into_iter().collect();
        catalog.sort_by_name();
        Ok(catalog)
    }
}
