//! Core model – widgets, the factories that make them, and the demo tree.
//!
//! Nothing in this module writes to the terminal; see [`crate::ui`].

pub mod builder;
pub mod factory;
pub mod widget;
