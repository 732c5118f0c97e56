//! Rendering module reports as plain text or JSON.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use apidelta_engine::{ChangeKind, ChangeRecord, ModuleReport};
use apidelta_foundation::{Error, Result};

/// Heading used for records without a parent.
const TOP_LEVEL: &str = "(top level)";

/// Renders a report as an indented listing grouped by parent path.
///
/// Top-level records come first, then each path in lexical order. Records
/// keep their report order inside a group.
#[must_use]
pub fn render_text(report: &ModuleReport) -> String {
    let mut out = String::new();
    let counts = report.counts();
    let _ = writeln!(
        out,
        "Module {}: {}, {}, {}",
        report.module_name,
        plural(counts.additions, "addition", "additions"),
        plural(counts.removals, "removal", "removals"),
        plural(counts.modifications, "modification", "modifications"),
    );

    if report.is_empty() {
        out.push_str("\nNo changes.\n");
    }

    let mut groups: BTreeMap<&str, Vec<&ChangeRecord>> = BTreeMap::new();
    for change in &report.changes {
        groups.entry(change.parent_path.as_str()).or_default().push(change);
    }
    for (path, changes) in groups {
        out.push('\n');
        out.push_str(if path.is_empty() { TOP_LEVEL } else { path });
        out.push('\n');
        for change in changes {
            render_change(&mut out, change);
        }
    }

    let deltas = report.metrics.deltas();
    out.push_str("\nDeclarations\n");
    let _ = writeln!(out, "  old: {}", report.metrics.old.summary());
    let _ = writeln!(out, "  new: {}", report.metrics.new.summary());
    for delta in deltas {
        let _ = writeln!(
            out,
            "  {}: {} -> {} ({:+})",
            delta.kind.plural(),
            delta.old,
            delta.new,
            delta.delta()
        );
    }
    out
}

fn render_change(out: &mut String, change: &ChangeRecord) {
    match &change.kind {
        ChangeKind::Addition { description } => write_block(out, "  + ", description),
        ChangeKind::Removal { description } => write_block(out, "  - ", description),
        ChangeKind::Modification {
            old_description,
            new_description,
            field_diffs,
        } => {
            write_block(out, "  ~ ", old_description);
            write_block(out, "    -> ", new_description);
            for diff in field_diffs {
                let _ = writeln!(out, "      * {diff}");
            }
        }
    }
}

/// Writes a possibly multi-line description, aligning continuation lines.
fn write_block(out: &mut String, marker: &str, text: &str) {
    let indent = " ".repeat(marker.len());
    for (i, line) in text.lines().enumerate() {
        out.push_str(if i == 0 { marker } else { &indent });
        out.push_str(line);
        out.push('\n');
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

/// Serializes a report as pretty-printed JSON.
///
/// # Errors
/// Returns an internal error if serialization fails.
pub fn render_json(report: &ModuleReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| Error::internal(format!("JSON output: {e}")))
}
