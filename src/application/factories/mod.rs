mod document_source_factory;
mod formatter_factory;
mod presenter_factory;

pub use document_source_factory::DocumentSourceFactory;
pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
