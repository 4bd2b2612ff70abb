//! Rendering configuration.

/// Layout knobs for the text renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces added per nesting level.
    pub indent_step: usize,
    /// Indentation of the root line.
    pub start_indent: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_step: 4,
            start_indent: 0,
        }
    }
}
