//! Compilation of style declarations into resolved styles.

use horizon_cascade_hooks::{CompiledProperties, DeclarationMap, PropertyDeclaration};

use super::flatten::{Leaf, flatten};
use super::tree::{DEFAULT_KEY, PropertyValue, StyleDeclaration};
use crate::hooks::HookRegistry;
use crate::style::Style;
use crate::Result;

/// Compiles style declarations against a hook registry.
///
/// This is the only component that hands declarations to the hook system.
/// Every hook used by a declaration is checked against the registry before
/// anything is compiled, so a failing call never yields a partial style.
#[derive(Debug, Clone, Copy)]
pub struct CascadeCompiler<'a> {
    registry: &'a HookRegistry,
}

impl<'a> CascadeCompiler<'a> {
    /// Create a compiler for a registry.
    pub fn new(registry: &'a HookRegistry) -> Self {
        Self { registry }
    }

    /// The registry this compiler validates against.
    pub fn registry(&self) -> &'a HookRegistry {
        self.registry
    }

    /// Compile a declaration into a resolved style.
    pub fn compile(&self, declaration: &StyleDeclaration) -> Result<Style> {
        Ok(Style::from_properties(self.compile_properties(declaration)?))
    }

    /// Compile a declaration into a flat property map.
    pub(crate) fn compile_properties(
        &self,
        declaration: &StyleDeclaration,
    ) -> Result<CompiledProperties> {
        let declarations = self.declaration_map(declaration)?;
        self.registry.compile(&declarations)
    }

    /// Translate each property into the hook system's input shape.
    fn declaration_map(&self, declaration: &StyleDeclaration) -> Result<DeclarationMap> {
        let mut declarations = DeclarationMap::with_capacity(declaration.len());

        for (property, value) in declaration.iter() {
            let translated = match value {
                PropertyValue::Value(value) => PropertyDeclaration::Literal(Some(value.clone())),
                PropertyValue::Unset => PropertyDeclaration::Literal(None),
                PropertyValue::Conditional(_) => {
                    self.check_hooks(value)?;

                    let flattened = flatten(value);
                    if flattened.base.is_none() && flattened.declarations.is_empty() {
                        tracing::trace!("Skipping '{}': no values", property);
                        continue;
                    }

                    let mut on = Vec::with_capacity(flattened.declarations.len());
                    for declaration in flattened.declarations {
                        on.push((
                            declaration.conditions.to_condition(),
                            declaration.value.into_value(),
                        ));
                    }

                    PropertyDeclaration::Conditional {
                        default: flattened.base.and_then(Leaf::into_value),
                        on,
                    }
                }
            };
            declarations.insert(property.to_string(), translated);
        }

        Ok(declarations)
    }

    /// Check every hook key in a value tree, including keys whose subtree
    /// holds no values.
    fn check_hooks(&self, value: &PropertyValue) -> Result<()> {
        let mut stack = vec![value];
        while let Some(current) = stack.pop() {
            if let PropertyValue::Conditional(entries) = current {
                for (key, nested) in entries {
                    if key != DEFAULT_KEY {
                        self.registry.check(key)?;
                    }
                    stack.push(nested);
                }
            }
        }
        Ok(())
    }
}
