//! Conditional value resolution and cascade compilation.

mod compiler;
mod flatten;
mod tree;

pub use compiler::CascadeCompiler;
pub use flatten::{ConditionSet, Declaration, Flattened, Leaf, flatten};
pub use tree::{Branch, DEFAULT_KEY, PropertyValue, StyleDeclaration};
