/// Integration tests for the application layer
mod test_utilities;

use chrono::NaiveDate;
use std::path::PathBuf;
use test_utilities::mocks::*;
use pkg_history::prelude::*;

const CATALOG: &str = include_str!("fixtures/packagesite.json");
const HISTORY: &str = include_str!("fixtures/packagehistory.json");
const PACKAGESITE_DUMP: &str = include_str!("fixtures/packagesite.yaml");

fn fixture_source() -> MockDocumentSource {
    MockDocumentSource::new()
        .with_document("packagesite.json", CATALOG)
        .with_document("packagehistory.json", HISTORY)
}

#[tokio::test]
async fn test_browse_happy_path() {
    let source = fixture_source();
    let progress_reporter = MockProgressReporter::new();
    let use_case = BrowseHistoryUseCase::new(source.clone(), progress_reporter.clone());

    let response = use_case.execute(BrowseRequest::default(), false).await;

    assert!(!response.degraded);
    assert_eq!(
        source.requested_paths(),
        vec!["packagesite.json", "packagehistory.json"]
    );

    let table = &response.read_model.table;
    assert_eq!(
        table.columns,
        vec![
            "Package",
            "1001 (2024-03-15)",
            "1000 (2024-01-10)",
            "999 (2023-11-02)"
        ]
    );
    assert_eq!(table.rows.len(), 11);
    assert_eq!(table.rows[0], vec!["bash", "5.2.26", "5.2.21", "5.2.21"]);
    assert_eq!(table.selected.as_deref(), Some("bash"));

    let detail = response.read_model.detail.as_ref().unwrap();
    assert_eq!(detail.name, "bash");
    assert_eq!(detail.comment, "GNU Project's Bourne Again SHell");
    assert_eq!(detail.versions, vec!["5.2.26", "5.2.21"]);
    let gettext = detail.tree.nodes()[0].as_dependency().unwrap();
    assert_eq!(gettext.name, "gettext-runtime");
    assert_eq!(gettext.version, "0.22.5");
    assert!(gettext.expandable);
    assert!(!gettext.expanded);

    assert!(progress_reporter.message_count() >= 3);
}

#[tokio::test]
async fn test_browse_package_missing_from_catalog() {
    let use_case = BrowseHistoryUseCase::new(fixture_source(), MockProgressReporter::new());
    let request = BrowseRequest::builder()
        .package(Some("legacy-tool".to_string()))
        .build()
        .unwrap();

    let response = use_case.execute(request, false).await;

    let detail = response.read_model.detail.unwrap();
    assert!(!detail.is_found());
    assert_eq!(detail.message.as_deref(), Some("Package not found"));
    assert!(detail.name.is_empty());
    assert!(detail.tree.is_empty());
    assert_eq!(detail.versions, vec!["1.0"]);
}

#[tokio::test]
async fn test_browse_cycle_is_marked() {
    let use_case = BrowseHistoryUseCase::new(fixture_source(), MockProgressReporter::new());
    let request = BrowseRequest::builder()
        .package(Some("python311".to_string()))
        .expand_all(true)
        .build()
        .unwrap();

    let response = use_case.execute(request, false).await;

    let detail = response.read_model.detail.unwrap();
    let setuptools = detail.tree.nodes()[0].as_dependency().unwrap();
    assert!(setuptools.expanded);
    assert_eq!(
        setuptools.children[0],
        TreeNode::Cycle {
            name: "python311".to_string(),
            version: "3.11.6".to_string()
        }
    );
}

#[tokio::test]
async fn test_browse_history_failure_degrades() {
    let source = MockDocumentSource::new()
        .with_document("packagesite.json", CATALOG)
        .with_failure("packagehistory.json", 503);
    let progress_reporter = MockProgressReporter::new();
    let use_case = BrowseHistoryUseCase::new(source, progress_reporter.clone());

    let response = use_case.execute(BrowseRequest::default(), false).await;

    assert!(response.degraded);
    assert!(response.read_model.table.rows.is_empty());
    assert!(response.read_model.detail.is_none());
    assert!(response.read_model.warnings[0].contains("503"));
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error:")));
}

#[tokio::test]
async fn test_browse_then_select_another_package() {
    let use_case = BrowseHistoryUseCase::new(fixture_source(), MockProgressReporter::new());
    let mut response = use_case.execute(BrowseRequest::default(), false).await;
    let catalog: Catalog = serde_json::from_str(CATALOG).unwrap();

    let detail = SelectPackageUseCase::new(&catalog).on_package_selected(&mut response.table, "curl");

    assert_eq!(response.table.selected(), Some("curl"));
    assert_eq!(detail.versions, vec!["8.6.0", "8.5.0"]);
    assert_eq!(detail.tree.nodes().len(), 3);

    // Re-rendering keeps the user's selection
    response.table.render();
    assert_eq!(response.table.selected(), Some("curl"));
}

#[tokio::test]
async fn test_browse_formats_render() {
    let use_case = BrowseHistoryUseCase::new(fixture_source(), MockProgressReporter::new());
    let response = use_case.execute(BrowseRequest::default(), true).await;

    let html = HtmlFormatter::new().format(&response.read_model).unwrap();
    assert!(html.contains("<tr class=\"selected\"><td>bash</td>"));

    let markdown = MarkdownFormatter::new().format(&response.read_model).unwrap();
    assert!(markdown.contains("| **bash** | 5.2.26 | 5.2.21 | 5.2.21 |"));

    let json = JsonFormatter::new().format(&response.read_model).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sources"]["dev_mode"], true);
}

fn merge_request(build: &str) -> MergeRequest {
    MergeRequest {
        packagesite_path: PathBuf::from("packagesite.yaml"),
        history_path: PathBuf::from("packagehistory.json"),
        build: build.to_string(),
        release_date: "2024-05-02".to_string(),
        freebsd_version: Some("14.1".to_string()),
        packages_count: Some("1234".to_string()),
        catalog_out: None,
        readme_path: None,
    }
}

#[tokio::test]
async fn test_merge_new_build() {
    let store = MockHistoryStore::new(PACKAGESITE_DUMP, Some(HISTORY));
    let progress_reporter = MockProgressReporter::new();
    let use_case = MergeHistoryUseCase::new(store.clone(), progress_reporter.clone());

    let summary = use_case
        .execute(merge_request("1002"), NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())
        .await
        .unwrap();

    assert!(summary.build_added);
    assert_eq!(summary.packages_added, 1);
    assert_eq!(summary.versions_added, 4);
    assert_eq!(store.saves(), 1);

    let history = store.saved_history().unwrap();
    let first_build = history.builds.keys().next().unwrap();
    assert_eq!(first_build.as_str(), "1002");
    assert_eq!(
        history.packages["curl"].version_at(&BuildId::new("1002")),
        Some("8.7.1")
    );
    let names: Vec<&str> = history.packages.keys().map(String::as_str).collect();
    let jq = names.iter().position(|n| *n == "jq").unwrap();
    let legacy = names.iter().position(|n| *n == "legacy-tool").unwrap();
    assert!(jq < legacy);

    // The merged history renders a new leading column
    let matrix = MatrixBuilder::build(&history);
    assert_eq!(matrix.columns()[1], "1002 (2024-05-02)");
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Completed: Merged build 1002")));
}

#[tokio::test]
async fn test_merge_existing_build_keeps_versions() {
    let store = MockHistoryStore::new(PACKAGESITE_DUMP, Some(HISTORY));
    let use_case = MergeHistoryUseCase::new(store.clone(), MockProgressReporter::new());

    let summary = use_case
        .execute(merge_request("1001"), NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())
        .await
        .unwrap();

    assert!(!summary.build_added);
    let history = store.saved_history().unwrap();
    assert_eq!(
        history.packages["curl"].version_at(&BuildId::new("1001")),
        Some("8.6.0")
    );
    assert_eq!(
        history.builds[&BuildId::new("1001")].update_date.as_deref(),
        Some("2024-03-16")
    );
}

#[tokio::test]
async fn test_merge_missing_history_fails() {
    let store = MockHistoryStore::new(PACKAGESITE_DUMP, None);
    let use_case = MergeHistoryUseCase::new(store.clone(), MockProgressReporter::new());

    let result = use_case
        .execute(merge_request("1002"), NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())
        .await;

    assert!(result.is_err());
    assert_eq!(store.saves(), 0);
}

const README: &str = "# Repository History

| Build | Release Date | FreeBSD Version | Package Count | Update Date |
|-------|--------------|-----------------|---------------|-------------|
| 1001 | 2024-03-15 | 14.0 | 1210 | 2024-03-16 |

## License
";

#[tokio::test]
async fn test_merge_exports_browsable_catalog_and_readme_row() {
    let store = MockHistoryStore::new(PACKAGESITE_DUMP, Some(HISTORY)).with_readme(README);
    let use_case = MergeHistoryUseCase::new(store.clone(), MockProgressReporter::new());
    let request = MergeRequest {
        catalog_out: Some(PathBuf::from("packagesite.json")),
        readme_path: Some(PathBuf::from("README.md")),
        ..merge_request("1002")
    };

    use_case
        .execute(request, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())
        .await
        .unwrap();

    // The exported catalog feeds the browser like the published one
    let catalog = store.saved_catalog().unwrap();
    let exported = serde_json::to_string(&catalog).unwrap();
    let source = MockDocumentSource::new()
        .with_document("packagesite.json", &exported)
        .with_document("packagehistory.json", &serde_json::to_string(&store.saved_history().unwrap()).unwrap());
    let browse = BrowseHistoryUseCase::new(source, MockProgressReporter::new());
    let request = BrowseRequest::builder()
        .package(Some("jq".to_string()))
        .build()
        .unwrap();
    let response = browse.execute(request, false).await;
    assert!(!response.degraded);
    let detail = response.read_model.detail.unwrap();
    assert!(detail.is_found());
    assert_eq!(detail.versions, vec!["1.7.1"]);

    let readme = store.readme().unwrap();
    assert!(readme.contains(
        "| 1001 | 2024-03-15 | 14.0 | 1210 | 2024-03-16 |\n\
         | 1002 | 2024-05-02 | 14.1 | 1234 | 2024-05-03 |\n\
         \n\
         ## License\n"
    ));
}

#[tokio::test]
async fn test_merge_rejects_dump_entry_without_version() {
    let dump = format!("{}\n{{\"name\": \"nover\"}}\n", PACKAGESITE_DUMP.trim_end());
    let store = MockHistoryStore::new(&dump, Some(HISTORY));
    let use_case = MergeHistoryUseCase::new(store.clone(), MockProgressReporter::new());

    let err = use_case
        .execute(merge_request("1002"), NaiveDate::from_ymd_opt(2024, 5, 3).unwrap())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("package 'nover' has no version"));
    assert_eq!(store.saves(), 0);
}

#[test]
fn test_blank_recorded_version_shows_placeholder_and_no_choice() {
    let history: BuildHistory = serde_json::from_str(
        r#"{
            "builds": {"101": {"release_date": "2024-02-01"}},
            "packages": {"nover": {"versions": {"101": ""}}}
        }"#,
    )
    .unwrap();

    let matrix = MatrixBuilder::build(&history);

    assert_eq!(matrix.rows()[0].cells(), &["nover", " - "]);
    assert!(VersionChoices::collect(matrix.rows(), "nover").is_empty());
}

