/// Formatter adapters for the supported page formats
mod html_formatter;
mod json_formatter;
mod markdown_formatter;

pub use html_formatter::HtmlFormatter;
pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
