use crate::application::read_models::BrowseReadModel;
use crate::ports::outbound::HistoryFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the read model as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryFormatter for JsonFormatter {
    fn format(&self, model: &BrowseReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{DetailPanelView, SourcesView, TableReadView};
    use crate::history::domain::{DependencyTree, PackageRecord, TreeNode};

    #[test]
    fn test_format_json_shape() {
        let detail = DetailPanelView::from_record(
            "bash",
            &PackageRecord::default(),
            vec!["5.2".to_string()],
            DependencyTree::new("bash", vec![TreeNode::NoDependencies]),
        );
        let model = BrowseReadModel {
            title: "Package Repository History".to_string(),
            sources: SourcesView::default(),
            table: TableReadView {
                columns: vec!["Package".to_string()],
                rows: vec![vec!["bash".to_string()]],
                total_rows: 1,
                filter: None,
                selected: Some("bash".to_string()),
            },
            detail: Some(detail),
            warnings: vec![],
        };

        let json = JsonFormatter::new().format(&model).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["table"]["selected"], "bash");
        assert_eq!(value["detail"]["name"], "bash");
        assert_eq!(value["detail"]["tree"]["nodes"][0]["kind"], "no_dependencies");
    }
}
