/// Network adapters for fetching the published documents
mod http_document_source;

pub use http_document_source::HttpDocumentSource;
