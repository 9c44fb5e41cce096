//! Custom-property variable groups.

use std::collections::HashMap;
use std::ops::Index;

use indexmap::IndexMap;

use crate::style::Style;

/// A group of generated custom properties with default values.
///
/// Each key maps to a `var(--name, default)` expression that can be used as
/// a property value in any declaration. Themes override the underlying
/// custom properties; without a theme the default applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarGroup {
    vars: IndexMap<String, String>,
    helpers: Style,
}

impl VarGroup {
    pub(crate) fn new(vars: IndexMap<String, String>, helpers: Style) -> Self {
        Self { vars, helpers }
    }

    /// The `var(...)` expression for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    /// Iterate over keys and expressions in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Helper properties required by conditional defaults.
    ///
    /// Empty unless a default depends on a combination of hooks. Merging the
    /// group itself applies them.
    pub fn helpers(&self) -> &Style {
        &self.helpers
    }
}

impl Index<&str> for VarGroup {
    type Output = str;

    /// Panics if the key is not defined.
    fn index(&self, key: &str) -> &str {
        &self.vars[key]
    }
}

/// Engine-wide custom property allocation.
///
/// Names are allocated from a counter that only grows. Rendered expressions
/// are recorded so a theme can find the property behind the value its
/// caller holds.
#[derive(Debug, Default)]
pub(crate) struct VariableTable {
    next_id: u64,
    names: HashMap<String, String>,
}

impl VariableTable {
    /// Allocate a fresh custom property name.
    pub(crate) fn allocate(&mut self, prefix: &str) -> String {
        let name = format!("--_{}_var_{}", prefix, self.next_id);
        self.next_id += 1;
        name
    }

    /// Remember which property an expression refers to.
    pub(crate) fn record(&mut self, expression: String, name: String) {
        self.names.insert(expression, name);
    }

    /// The property behind an expression.
    pub(crate) fn lookup(&self, expression: &str) -> Option<&str> {
        self.names.get(expression).map(|s| s.as_str())
    }

    /// Number of names allocated so far.
    pub(crate) fn allocated(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_never_reused() {
        let mut table = VariableTable::default();
        let a = table.allocate("app");
        let b = table.allocate("app");
        assert_eq!(a, "--_app_var_0");
        assert_eq!(b, "--_app_var_1");
        assert_eq!(table.allocated(), 2);
    }

    #[test]
    fn expressions_resolve_to_names() {
        let mut table = VariableTable::default();
        table.record("var(--_app_var_0, green)".into(), "--_app_var_0".into());
        assert_eq!(table.lookup("var(--_app_var_0, green)"), Some("--_app_var_0"));
        assert_eq!(table.lookup("var(--other)"), None);
    }
}
