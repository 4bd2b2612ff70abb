//! Widget tree: platform-themed leaves and the containers that hold them.
//!
//! A [`Widget`] is either a [`Leaf`] (button, checkbox) or a [`Container`].
//! Both are handled through the same `add` / `remove` / `render` surface;
//! leaves simply refuse child management with
//! [`WidgetError::UnsupportedOperation`].
//!
//! Every widget carries a [`WidgetId`] assigned at construction.  Clones keep
//! the id, so a clone works as a handle for `remove`, which matches by
//! instance rather than by content.
//!
//! Children are owned by value, so a container can never end up inside its
//! own descendant chain.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use super::factory::Platform;

// ───────────────────────────────────────── errors ────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// Child management was attempted on a leaf.
    #[error("cannot {op} children of leaf widget {label}")]
    UnsupportedOperation { op: &'static str, label: String },

    /// `remove` was asked for a widget the container does not hold.
    #[error("widget {name:?} is not a child of container {container:?}")]
    NotFound { name: String, container: String },
}

// ───────────────────────────────────────── identity ──────────

/// Instance identity of a widget.  Two widgets built with the same
/// arguments still get different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// ───────────────────────────────────────── leaves ────────────

/// Semantic kind of a leaf widget, independent of platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Checkbox,
}

impl WidgetKind {
    pub const ALL: &'static [WidgetKind] = &[WidgetKind::Button, WidgetKind::Checkbox];
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WidgetKind::Button => "Button",
            WidgetKind::Checkbox => "Checkbox",
        })
    }
}

/// A terminal node.  The four platform variants are data, not types:
/// the label is derived from the `(platform, kind)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    id: WidgetId,
    pub platform: Platform,
    pub kind: WidgetKind,
    pub name: String,
}

impl Leaf {
    pub fn new(platform: Platform, kind: WidgetKind, name: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            platform,
            kind,
            name: name.into(),
        }
    }

    /// Fixed label such as `"WindowsButton"` or `"MacCheckbox"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.platform, self.kind)
    }
}

// ───────────────────────────────────────── container ─────────

/// Composite node: an ordered list of owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: WidgetId,
    pub name: String,
    children: Vec<Widget>,
}

impl Container {
    pub const LABEL: &'static str = "Container";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WidgetId::next(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append `child` after the existing children.
    pub fn add(&mut self, child: impl Into<Widget>) {
        self.children.push(child.into());
    }

    /// Remove and return the direct child that is the same instance as
    /// `child`.
    pub fn remove(&mut self, child: &Widget) -> Result<Widget, WidgetError> {
        let id = child.id();
        match self.children.iter().position(|c| c.id() == id) {
            Some(idx) => Ok(self.children.remove(idx)),
            None => Err(WidgetError::NotFound {
                name: child.name().to_string(),
                container: self.name.clone(),
            }),
        }
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

// ───────────────────────────────────────── widget ────────────

/// Any node of the UI tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Leaf(Leaf),
    Container(Container),
}

impl Widget {
    pub fn id(&self) -> WidgetId {
        match self {
            Widget::Leaf(leaf) => leaf.id,
            Widget::Container(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Widget::Leaf(leaf) => &leaf.name,
            Widget::Container(c) => &c.name,
        }
    }

    /// Text printed before the name on this widget's line.
    pub fn label(&self) -> String {
        match self {
            Widget::Leaf(leaf) => leaf.label(),
            Widget::Container(_) => Container::LABEL.to_string(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Widget::Leaf(_))
    }

    /// Direct children; always empty for leaves.
    pub fn children(&self) -> &[Widget] {
        match self {
            Widget::Leaf(_) => &[],
            Widget::Container(c) => c.children(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(Widget::count).sum::<usize>()
    }

    pub fn add(&mut self, child: impl Into<Widget>) -> Result<(), WidgetError> {
        match self {
            Widget::Leaf(leaf) => Err(WidgetError::UnsupportedOperation {
                op: "add",
                label: leaf.label(),
            }),
            Widget::Container(c) => {
                c.add(child);
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, child: &Widget) -> Result<Widget, WidgetError> {
        match self {
            Widget::Leaf(leaf) => Err(WidgetError::UnsupportedOperation {
                op: "remove",
                label: leaf.label(),
            }),
            Widget::Container(c) => c.remove(child),
        }
    }

    /// Print this subtree to stdout, starting `indent` spaces in.
    pub fn render(&self, indent: usize) -> io::Result<()> {
        let stdout = io::stdout();
        self.render_to(&mut stdout.lock(), indent)
    }

    /// Same as [`Widget::render`], into any writer.
    pub fn render_to<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        let config = crate::config::RenderConfig {
            start_indent: indent,
            ..Default::default()
        };
        crate::ui::render::write_tree(out, self, &config)
    }
}

impl From<Leaf> for Widget {
    fn from(leaf: Leaf) -> Self {
        Widget::Leaf(leaf)
    }
}

impl From<Container> for Widget {
    fn from(container: Container) -> Self {
        Widget::Container(container)
    }
}
