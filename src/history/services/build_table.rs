use crate::history::domain::{BuildId, BuildInfo};
use regex::Regex;
use std::sync::LazyLock;

/// Shown for metadata the merge was not given
const MISSING: &str = "-";

/// Header row, separator and body of the builds table; the match ends after the last row
static BUILD_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\|[ \t]*Build[ \t]*\|[ \t]*Release Date[ \t]*\|[ \t]*FreeBSD Version[ \t]*\|[ \t]*Package Count[ \t]*\|[ \t]*Update Date[ \t]*\|[ \t]*\r?\n\|[-|: \t]+\|[ \t]*(?:\r?\n\|.*\|[ \t]*)*",
    )
    .expect("static regex")
});

/// BuildTable service maintaining the builds table of the repository README
///
/// The table has the columns `Build | Release Date | FreeBSD Version |
/// Package Count | Update Date`; one row is appended per merged build.
pub struct BuildTable;

impl BuildTable {
    /// Markdown row describing one build
    pub fn row(build: &BuildId, info: &BuildInfo) -> String {
        let cell = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(MISSING)
                .to_string()
        };
        format!(
            "| {} | {} | {} | {} | {} |",
            build,
            cell(Some(info.release_date.as_str())),
            cell(info.freebsd_version.as_deref()),
            cell(info.packages_count.as_deref()),
            cell(info.update_date.as_deref())
        )
    }

    /// Appends the row for `build` after the last row of the first builds table
    ///
    /// Returns `None` if `content` has no builds table. Text around the table
    /// is kept byte for byte.
    pub fn append_row(content: &str, build: &BuildId, info: &BuildInfo) -> Option<String> {
        let table = BUILD_TABLE.find(content)?;
        let end = table.end();

        let mut updated = String::with_capacity(content.len() + 64);
        updated.push_str(&content[..end]);
        updated.push('\n');
        updated.push_str(&Self::row(build, info));
        updated.push_str(&content[end..]);
        Some(updated)
    }
}
