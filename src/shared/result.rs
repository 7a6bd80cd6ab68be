/// Type alias for Result with anyhow::Error as the error type.
/// Domain failures are `HistoryError` values wrapped into this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
