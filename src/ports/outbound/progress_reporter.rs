/// ProgressReporter port for user-facing status messages
///
/// Messages go somewhere that does not mix with the rendered report
/// (stderr for the CLI). Diagnostic detail belongs in `tracing` instead.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Reports step `current` of `total`, e.g. one document of two being fetched
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a degraded result or warning
    fn report_error(&self, message: &str);

    /// Reports that an operation finished
    fn report_completion(&self, message: &str);
}
