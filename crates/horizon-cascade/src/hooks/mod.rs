//! Hook names and the hook registry.

mod name;
mod registry;

pub use name::{HookKind, HookName};
pub use registry::HookRegistry;
