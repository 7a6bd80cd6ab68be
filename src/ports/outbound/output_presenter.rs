use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// Abstracts the destination (stdout, a file) of the formatted page.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn present(&self, content: &str) -> Result<()>;
}
