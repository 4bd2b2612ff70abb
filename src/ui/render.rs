//! Text renderer for a [`Widget`] tree.
//!
//! The tree is first flattened pre-order into [`Row`]s, then each row is
//! written as `<indent spaces><Label>: <name>`.

use std::io::{self, Write};

use crate::config::RenderConfig;
use crate::core::widget::Widget;

// ───────────────────────────────────────── row model ─────────

/// One printed line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub indent: usize,
    pub label: String,
    pub name: String,
}

impl Row {
    pub fn line(&self) -> String {
        format!("{:indent$}{}: {}", "", self.label, self.name, indent = self.indent)
    }
}

/// Flatten `widget` into rows: each node before its children, children in
/// insertion order, `step` more spaces per level.
pub fn rows(widget: &Widget, indent: usize, step: usize) -> Vec<Row> {
    let mut out = Vec::with_capacity(widget.count());
    collect_rows(widget, indent, step, &mut out);
    out
}

fn collect_rows(widget: &Widget, indent: usize, step: usize, out: &mut Vec<Row>) {
    out.push(Row {
        indent,
        label: widget.label(),
        name: widget.name().to_string(),
    });
    for child in widget.children() {
        collect_rows(child, indent + step, step, out);
    }
}

// ───────────────────────────────────────── output ────────────

pub fn write_tree<W: Write>(out: &mut W, widget: &Widget, config: &RenderConfig) -> io::Result<()> {
    tracing::trace!(root = widget.name(), indent = config.start_indent, "render");
    for row in rows(widget, config.start_indent, config.indent_step) {
        writeln!(out, "{}", row.line())?;
    }
    Ok(())
}

pub fn render_to_string(widget: &Widget, config: &RenderConfig) -> io::Result<String> {
    let mut buf = Vec::new();
    write_tree(&mut buf, widget, config)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
