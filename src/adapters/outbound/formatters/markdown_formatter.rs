use crate::application::read_models::{BrowseReadModel, DetailPanelView, TableReadView};
use crate::history::domain::{TreeNode, CYCLIC_DEPENDENCY, NO_DEPENDENCIES};
use crate::ports::outbound::HistoryFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter rendering the browser page as a Markdown report
///
/// Markdown has no collapsible lists, so only expanded subtrees are listed;
/// a collapsed node is marked with `▸`.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters on top of inline escaping for Markdown table cells
    fn escape_markdown_table_cell(text: &str) -> String {
        Self::escape_inline(text).replace('|', "\\|")
    }

    /// Backslash-escapes emphasis, link, code and HTML characters; newlines become spaces
    fn escape_inline(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '\n' | '\r' => escaped.push(' '),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &BrowseReadModel) {
        output.push_str(&format!("# {}\n\n", model.title));
        output.push_str(&format!(
            "- Catalog: `{}`\n- History: `{}`\n",
            model.sources.catalog, model.sources.history
        ));
        if model.sources.dev_mode {
            output.push_str("- Mode: development\n");
        }
        output.push('\n');

        for warning in &model.warnings {
            output.push_str(&format!(
                "> ⚠️ {}\n",
                warning.lines().next().unwrap_or_default()
            ));
        }
        if !model.warnings.is_empty() {
            output.push('\n');
        }
    }

    fn render_table(&self, output: &mut String, table: &TableReadView) {
        output.push_str("## Versions\n\n");
        if let Some(ref filter) = table.filter {
            output.push_str(&format!(
                "Search `{}`: {} of {} package(s).\n\n",
                filter,
                table.rows.len(),
                table.total_rows
            ));
        }

        if table.rows.is_empty() {
            output.push_str("*No packages*\n\n");
            return;
        }

        let header: Vec<String> = table
            .columns
            .iter()
            .map(|c| Self::escape_markdown_table_cell(c))
            .collect();
        output.push_str(&format!("| {} |\n", header.join(" | ")));
        output.push_str(&format!("|{}\n", "---|".repeat(table.columns.len())));

        for row in &table.rows {
            let mut cells: Vec<String> = row
                .iter()
                .map(|c| Self::escape_markdown_table_cell(c.trim()))
                .collect();
            if table.is_selected(row) {
                if let Some(name) = cells.first_mut() {
                    *name = format!("**{}**", name);
                }
            }
            output.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        output.push('\n');
    }

    fn render_detail(&self, output: &mut String, detail: &DetailPanelView) {
        output.push_str(&format!(
            "## Package: {}\n\n",
            Self::escape_inline(&detail.selected)
        ));

        if let Some(ref message) = detail.message {
            output.push_str(&format!("*{}*\n\n", Self::escape_inline(message)));
            return;
        }

        for (label, value) in [
            ("Name", &detail.name),
            ("Comment", &detail.comment),
            ("Maintainer", &detail.maintainer),
            ("Architecture", &detail.arch),
            ("Description", &detail.description),
        ] {
            output.push_str(&format!("- **{}**: {}\n", label, Self::escape_inline(value)));
        }
        if !detail.versions.is_empty() {
            let versions: Vec<String> = detail
                .versions
                .iter()
                .map(|v| Self::escape_inline(v))
                .collect();
            output.push_str(&format!("- **Versions**: {}\n", versions.join(", ")));
        }
        output.push('\n');

        output.push_str("### Dependencies\n\n");
        for node in detail.tree.nodes() {
            self.render_node(output, node, 0);
        }
        output.push('\n');
    }

    fn render_node(&self, output: &mut String, node: &TreeNode, depth: usize) {
        let indent = "  ".repeat(depth);
        match node {
            TreeNode::NoDependencies => {
                output.push_str(&format!("{}- *{}*\n", indent, NO_DEPENDENCIES));
            }
            TreeNode::Cycle { name, version } => {
                output.push_str(&format!(
                    "{}- {} ({}) ↺ *{}*\n",
                    indent,
                    Self::escape_inline(name),
                    Self::escape_inline(version),
                    CYCLIC_DEPENDENCY
                ));
            }
            TreeNode::Dependency(dep) => {
                let marker = if dep.expandable && !dep.expanded {
                    " ▸"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "{}- {} ({}){}\n",
                    indent,
                    Self::escape_inline(&dep.name),
                    Self::escape_inline(&dep.version),
                    marker
                ));
                if dep.shows_children() {
                    for child in &dep.children {
                        self.render_node(output, child, depth + 1);
                    }
                }
            }
        }
    }
}

impl HistoryFormatter for MarkdownFormatter {
    fn format(&self, model: &BrowseReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_table(&mut output, &model.table);
        if let Some(ref detail) = model.detail {
            self.render_detail(&mut output, detail);
        }

        Ok(output)
    }
}
