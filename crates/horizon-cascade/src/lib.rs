//! Conditional inline styles for Horizon Cascade.
//!
//! This crate compiles style declarations whose values depend on hooks
//! (pseudo-classes, media and feature queries) into plain inline styles:
//!
//! - **Conditional values**: `{ default, ":hover": ... }` trees, nestable to
//!   require several hooks at once
//! - **Ordered merging**: later styles win and take the position of their
//!   properties, so no specificity rules are needed
//! - **Variables and themes**: generated custom properties with defaults and
//!   per-subtree overrides
//! - **Dynamic styles**: styles compiled once and parameterised at render time
//! - **Keyframes**: generated `@keyframes` names and blocks
//!
//! The only stylesheet required is [`StyleEngine::style_sheet`], which drives
//! every hook through custom-property toggles.
//!
//! # Example
//!
//! ```
//! use horizon_cascade::prelude::*;
//!
//! let engine = StyleEngine::builder()
//!     .hooks([":hover", "@media (min-width: 768px)"])
//!     .build()
//!     .unwrap();
//!
//! let styles = engine
//!     .create([
//!         (
//!             "button",
//!             StyleDeclaration::new().set("padding", 8).set(
//!                 "color",
//!                 PropertyValue::branch().base("black").on(":hover", "red"),
//!             ),
//!         ),
//!         (
//!             "wide",
//!             StyleDeclaration::new()
//!                 .set("padding", PropertyValue::branch().on("@media (min-width: 768px)", 16)),
//!         ),
//!     ])
//!     .unwrap();
//!
//! let inline = props!(&styles["button"], &styles["wide"]);
//! assert_eq!(inline.keys().collect::<Vec<_>>(), vec!["color", "padding"]);
//! ```

pub mod hooks;
pub mod resolve;
pub mod style;

mod config;
mod dynamic;
mod engine;
mod error;
mod keyframes;
mod vars;

pub use config::{DEFAULT_PREFIX, EngineBuilder, EngineConfig};
pub use dynamic::DynamicStyle;
pub use engine::StyleEngine;
pub use error::{Error, Result};
pub use keyframes::{KeyframeRegistry, Keyframes};
pub use resolve::{Branch, DEFAULT_KEY, PropertyValue, StyleDeclaration};
pub use style::{InlineStyle, Style, StyleProp, StyleSet, Theme, merge};
pub use vars::VarGroup;

pub use horizon_cascade_hooks::{Condition, DEFAULT_FALLBACK, Value};

/// Merge styles into an [`InlineStyle`].
///
/// Accepts anything convertible into a [`StyleProp`]: styles, themes,
/// variable groups, options and vectors of those.
///
/// ```
/// use horizon_cascade::{StyleDeclaration, StyleEngine, props};
///
/// let engine = StyleEngine::builder().build().unwrap();
/// let a = engine.inline(&StyleDeclaration::new().set("margin", 0).set("color", "red")).unwrap();
/// let b = engine.inline(&StyleDeclaration::new().set("margin", 4)).unwrap();
///
/// let style = props!(&a, None::<&horizon_cascade::Style>, &b);
/// assert_eq!(style.keys().collect::<Vec<_>>(), vec!["color", "margin"]);
/// ```
#[macro_export]
macro_rules! props {
    ($($style:expr),* $(,)?) => {{
        let styles: ::std::vec::Vec<$crate::StyleProp> =
            ::std::vec![$($crate::StyleProp::from($style)),*];
        $crate::merge(styles)
    }};
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{EngineBuilder, EngineConfig};
    pub use crate::dynamic::DynamicStyle;
    pub use crate::engine::StyleEngine;
    pub use crate::keyframes::Keyframes;
    pub use crate::props;
    pub use crate::resolve::{PropertyValue, StyleDeclaration};
    pub use crate::style::{InlineStyle, Style, StyleProp, StyleSet, Theme, merge};
    pub use crate::vars::VarGroup;
    pub use horizon_cascade_hooks::{Condition, Value};
}
