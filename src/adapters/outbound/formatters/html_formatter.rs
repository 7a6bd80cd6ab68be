use crate::application::read_models::{BrowseReadModel, DetailPanelView, TableReadView};
use crate::history::domain::{
    is_placeholder, DependencyTree, TreeNode, CYCLIC_DEPENDENCY, NO_DEPENDENCIES,
};
use crate::ports::outbound::HistoryFormatter;
use crate::shared::Result;

const STYLE: &str = r#"    <style>
      body { font-family: sans-serif; margin: 1.5rem; }
      .layout { display: flex; gap: 2rem; align-items: flex-start; }
      .table-wrapper { overflow: auto; max-height: 400px; flex: 2; }
      table { border-collapse: collapse; }
      th, td { border: 1px solid #ccc; padding: 0.25rem 0.5rem; white-space: nowrap; }
      th:first-child, td:first-child { position: sticky; left: 0; background: #fff; }
      tr.selected td { background: #dbeafe; }
      td.missing { color: #999; }
      .detail { flex: 1; }
      .warning { color: #b45309; }
      ul.tree { list-style: none; padding-left: 1rem; }
      .cycle { color: #b91c1c; font-style: italic; }
    </style>
"#;

/// HtmlFormatter adapter rendering the browser page as standalone HTML
///
/// The dependency tree uses `<details>` elements, open exactly where the
/// tree node is expanded, so the page needs no script.
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl HtmlFormatter {
    fn render_head(&self, output: &mut String, model: &BrowseReadModel) {
        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n");
        output.push_str("    <meta charset=\"utf-8\">\n");
        output.push_str(&format!(
            "    <title>{}</title>\n",
            Self::escape(&model.title)
        ));
        output.push_str(STYLE);
        output.push_str("  </head>\n  <body>\n");
        output.push_str(&format!("    <h1>{}</h1>\n", Self::escape(&model.title)));
    }

    fn render_sources(&self, output: &mut String, model: &BrowseReadModel) {
        output.push_str(&format!(
            "    <p class=\"sources\">Catalog: <code>{}</code> · History: <code>{}</code>{}</p>\n",
            Self::escape(&model.sources.catalog),
            Self::escape(&model.sources.history),
            if model.sources.dev_mode {
                " · development mode"
            } else {
                ""
            }
        ));

        for warning in &model.warnings {
            output.push_str(&format!(
                "    <p class=\"warning\">⚠️ {}</p>\n",
                Self::escape(warning.lines().next().unwrap_or_default())
            ));
        }
    }

    fn render_table(&self, output: &mut String, table: &TableReadView) {
        output.push_str("      <div class=\"table-wrapper\">\n");
        if let Some(ref filter) = table.filter {
            output.push_str(&format!(
                "        <p class=\"filter\">Search: <code>{}</code> ({} of {} rows)</p>\n",
                Self::escape(filter),
                table.rows.len(),
                table.total_rows
            ));
        }

        output.push_str("        <table id=\"table\">\n          <thead>\n            <tr>");
        for column in &table.columns {
            output.push_str(&format!("<th>{}</th>", Self::escape(column)));
        }
        output.push_str("</tr>\n          </thead>\n          <tbody>\n");

        for row in &table.rows {
            if table.is_selected(row) {
                output.push_str("            <tr class=\"selected\">");
            } else {
                output.push_str("            <tr>");
            }
            for cell in row {
                if is_placeholder(cell) {
                    output.push_str(&format!("<td class=\"missing\">{}</td>", Self::escape(cell)));
                } else {
                    output.push_str(&format!("<td>{}</td>", Self::escape(cell)));
                }
            }
            output.push_str("</tr>\n");
        }
        output.push_str("          </tbody>\n        </table>\n      </div>\n");
    }

    fn render_detail(&self, output: &mut String, detail: &DetailPanelView) {
        output.push_str("      <aside class=\"detail\">\n");
        if let Some(ref message) = detail.message {
            output.push_str(&format!(
                "        <p id=\"package-message\">{}</p>\n",
                Self::escape(message)
            ));
        }

        output.push_str("        <dl>\n");
        for (id, label, value) in [
            ("package-name", "Name", &detail.name),
            ("package-comment", "Comment", &detail.comment),
            ("package-maintainer", "Maintainer", &detail.maintainer),
            ("package-arch", "Architecture", &detail.arch),
            ("package-description", "Description", &detail.description),
        ] {
            output.push_str(&format!(
                "          <dt>{}</dt><dd id=\"{}\">{}</dd>\n",
                label,
                id,
                Self::escape(value)
            ));
        }
        output.push_str("        </dl>\n");

        output.push_str("        <label for=\"package-version\">Version</label>\n");
        output.push_str("        <select id=\"package-version\">\n");
        for version in &detail.versions {
            output.push_str(&format!(
                "          <option>{}</option>\n",
                Self::escape(version)
            ));
        }
        output.push_str("        </select>\n");

        output.push_str("        <h2>Dependencies</h2>\n");
        self.render_tree(output, &detail.tree);
        output.push_str("      </aside>\n");
    }

    fn render_tree(&self, output: &mut String, tree: &DependencyTree) {
        output.push_str("        <ul class=\"tree\" id=\"dependency-tree\">\n");
        for node in tree.nodes() {
            self.render_node(output, node, 5);
        }
        output.push_str("        </ul>\n");
    }

    /// Renders one node; collapsed subtrees are emitted closed so they can
    /// still be opened in the browser.
    fn render_node(&self, output: &mut String, node: &TreeNode, depth: usize) {
        let indent = "  ".repeat(depth);
        match node {
            TreeNode::NoDependencies => {
                output.push_str(&format!("{}<li>{}</li>\n", indent, NO_DEPENDENCIES));
            }
            TreeNode::Cycle { name, version } => {
                output.push_str(&format!(
                    "{}<li class=\"cycle\">{} ({}) ↺ {}</li>\n",
                    indent,
                    Self::escape(name),
                    Self::escape(version),
                    CYCLIC_DEPENDENCY
                ));
            }
            TreeNode::Dependency(dep) if dep.expandable => {
                let open = if dep.expanded { " open" } else { "" };
                output.push_str(&format!(
                    "{}<li><details{}><summary>{} ({})</summary>\n",
                    indent,
                    open,
                    Self::escape(&dep.name),
                    Self::escape(&dep.version)
                ));
                output.push_str(&format!("{}  <ul class=\"tree\">\n", indent));
                for child in &dep.children {
                    self.render_node(output, child, depth + 2);
                }
                output.push_str(&format!("{}  </ul>\n{}</details></li>\n", indent, indent));
            }
            TreeNode::Dependency(dep) => {
                output.push_str(&format!(
                    "{}<li>{} ({})</li>\n",
                    indent,
                    Self::escape(&dep.name),
                    Self::escape(&dep.version)
                ));
            }
        }
    }
}

impl HistoryFormatter for HtmlFormatter {
    fn format(&self, model: &BrowseReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_head(&mut output, model);
        self.render_sources(&mut output, model);
        output.push_str("    <div class=\"layout\">\n");
        self.render_table(&mut output, &model.table);
        if let Some(ref detail) = model.detail {
            self.render_detail(&mut output, detail);
        }
        output.push_str("    </div>\n  </body>\n</html>\n");

        Ok(output)
    }
}
