//! Resolved styles and merging.

mod merge;
mod resolved;

pub use merge::{InlineStyle, StyleProp, merge};
pub use resolved::{Style, StyleSet, Theme};
