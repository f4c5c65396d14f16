//! HOBA Navigator library exports.
//!
//! `content` holds the immutable stage store and the overview graph
//! description, `core` the per-session navigator and configuration, and
//! `tui` the ratatui adapter that draws them.

pub mod content;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
