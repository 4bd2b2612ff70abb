//! Platform-themed widget trees: an abstract factory produces the leaves,
//! a composite container holds them, and a text renderer prints the result.

pub mod config;
pub mod core;
pub mod ui;
