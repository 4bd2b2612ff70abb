//! Console presentation of widget trees.

pub mod render;
