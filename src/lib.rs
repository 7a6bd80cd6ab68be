//! pkg-history - browse the version history of a binary package repository
//!
//! This library loads a package catalog and a build history, renders the
//! packages × builds version matrix, and resolves the dependency tree of the
//! selected package. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`history`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pkg_history::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let source = LocalDocumentSource::new(".");
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and execute
//! let use_case = BrowseHistoryUseCase::new(source, progress_reporter);
//! let response = use_case.execute(BrowseRequest::default(), true).await;
//!
//! // Format output
//! let output = HtmlFormatter::new().format(&response.read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod history;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemHistoryStore, FileSystemWriter, LocalDocumentSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, JsonFormatter, MarkdownFormatter,
    };
    pub use crate::adapters::outbound::network::HttpDocumentSource;
    pub use crate::application::dto::{BrowseRequest, BrowseResponse, MergeRequest, OutputFormat};
    pub use crate::application::read_models::{BrowseReadModel, DetailPanelView};
    pub use crate::application::use_cases::{
        BrowseHistoryUseCase, MergeHistoryUseCase, SelectPackageUseCase,
    };
    pub use crate::history::domain::{
        BuildHistory, BuildId, Catalog, DependencyTree, PackageRecord, TableView, TreeNode,
        VersionMatrix,
    };
    pub use crate::history::services::{
        BuildTable, HistoryMerger, MatrixBuilder, PackagesiteParser, TreeBuilder,
        VersionChoices,
    };
    pub use crate::ports::outbound::{
        DocumentSource, HistoryFormatter, HistoryStore, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, HistoryError};
    pub use crate::shared::Result;
}
