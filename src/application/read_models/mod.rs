//! Read models for the rendering side
//!
//! View-optimized structs that formatters consume without touching the
//! catalog or build history directly.

pub mod browse_read_model;
pub mod browse_read_model_builder;
pub mod detail_panel_view;

pub use browse_read_model::{BrowseReadModel, SourcesView, TableReadView};
pub use browse_read_model_builder::{BrowseReadModelBuilder, PAGE_TITLE};
pub use detail_panel_view::{DetailPanelView, PACKAGE_NOT_FOUND};
