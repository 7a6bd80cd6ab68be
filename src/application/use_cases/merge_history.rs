use crate::application::dto::MergeRequest;
use crate::history::services::{
    BuildMetadata, BuildTable, HistoryMerger, MergeSummary, PackagesiteParser,
};
use crate::ports::outbound::{HistoryStore, ProgressReporter};
use crate::shared::Result;
use chrono::NaiveDate;

/// MergeHistoryUseCase - integrates one build's packagesite dump into the history file
///
/// # Type Parameters
/// * `HS` - HistoryStore implementation
/// * `PR` - ProgressReporter implementation
pub struct MergeHistoryUseCase<HS, PR> {
    history_store: HS,
    progress_reporter: PR,
}

impl<HS, PR> MergeHistoryUseCase<HS, PR>
where
    HS: HistoryStore,
    PR: ProgressReporter,
{
    pub fn new(history_store: HS, progress_reporter: PR) -> Self {
        Self {
            history_store,
            progress_reporter,
        }
    }

    /// Executes the merge and writes the updated history back in place
    ///
    /// With `catalog_out` set, the parsed dump is also exported as the
    /// name-keyed catalog the browser reads. With `readme_path` set and a new
    /// build merged, a row is appended to the README's builds table; a README
    /// without that table is left untouched.
    ///
    /// # Arguments
    /// * `request` - Input paths and build metadata
    /// * `today` - Recorded as the new build's `update_date`
    ///
    /// # Errors
    /// Returns an error if the metadata is invalid, an input file cannot be
    /// read or parsed, or an output cannot be written. Nothing is written
    /// when validation, reading or parsing fails.
    pub async fn execute(&self, request: MergeRequest, today: NaiveDate) -> Result<MergeSummary> {
        let metadata = BuildMetadata::new(
            &request.build,
            &request.release_date,
            request.freebsd_version.clone(),
            request.packages_count.clone(),
            today,
        )?;

        self.progress_reporter.report(&format!(
            "📖 Loading packagesite dump from: {}",
            request.packagesite_path.display()
        ));
        let content = self
            .history_store
            .read_packagesite(&request.packagesite_path)?;
        let catalog = PackagesiteParser::parse(
            &content,
            &request.packagesite_path.display().to_string(),
        )?;
        self.progress_reporter
            .report(&format!("✅ Parsed {} package(s)", catalog.len()));

        let mut history = self.history_store.load_history(&request.history_path)?;
        let summary = HistoryMerger::merge(&mut history, &catalog, &metadata);

        let readme = match request.readme_path {
            Some(ref path) if summary.build_added => {
                let content = self.history_store.read_readme(path)?;
                let updated = BuildTable::append_row(&content, metadata.build(), metadata.info());
                if updated.is_none() {
                    tracing::warn!(path = %path.display(), "README has no builds table");
                    self.progress_reporter.report(&format!(
                        "⚠️ No builds table found in {}; README left unchanged",
                        path.display()
                    ));
                }
                updated.map(|content| (path, content))
            }
            _ => None,
        };

        self.history_store
            .save_history(&request.history_path, &history)?;

        if let Some(ref path) = request.catalog_out {
            self.history_store.save_catalog(path, &catalog)?;
            self.progress_reporter.report(&format!(
                "📝 Wrote {} package(s) to: {}",
                catalog.len(),
                path.display()
            ));
        }

        if let Some((path, content)) = readme {
            self.history_store.write_readme(path, &content)?;
            self.progress_reporter.report(&format!(
                "📝 Added build {} to the builds table in: {}",
                metadata.build(),
                path.display()
            ));
        }

        if summary.build_added {
            self.progress_reporter
                .report(&format!("🆕 Added build {}", metadata.build()));
        }
        self.progress_reporter.report_completion(&format!(
            "Merged build {} into {}: {} new package(s), {} new version(s), {} unchanged",
            metadata.build(),
            request.history_path.display(),
            summary.packages_added,
            summary.versions_added,
            summary.versions_unchanged
        ));

        Ok(summary)
    }
}
