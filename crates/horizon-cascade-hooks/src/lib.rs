//! Custom-property hooks for Horizon Cascade.
//!
//! This crate implements the CSS side of conditional inline styles:
//!
//! - **Toggle stylesheet**: every hook (`:hover`, `@media (...)`, ...) gets a
//!   pair of custom properties that flip between `initial` and empty while
//!   the hook is active
//! - **Fallback chains**: conditional declarations are compiled into nested
//!   `var()` expressions that pick the right value using only the browser's
//!   custom-property cascade
//! - **Conditions**: hooks can be combined with `and`, `or` and `not`
//!
//! # Example
//!
//! ```
//! use horizon_cascade_hooks::{HookOptions, HookSystem};
//!
//! let system = HookSystem::new([(":hover", "&:hover")], HookOptions::default());
//! let css = system.style_sheet();
//! assert!(css.contains("*:hover{"));
//! ```

mod condition;
mod error;
mod ident;
mod system;
mod value;

pub use condition::Condition;
pub use error::{Error, Result};
pub use ident::{hash, hook_id};
pub use system::{
    CompiledProperties, DEFAULT_FALLBACK, DeclarationMap, HookOptions, HookSystem,
    PropertyDeclaration,
};
pub use value::{Value, hyphenate, is_unitless, stringify};
