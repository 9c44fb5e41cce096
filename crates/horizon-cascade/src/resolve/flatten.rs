//! Flattening conditional value trees into prioritised declarations.

use horizon_cascade_hooks::{Condition, Value};

use super::tree::{DEFAULT_KEY, PropertyValue};

/// A resolved leaf of a value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// A literal value.
    Value(Value),
    /// The property is explicitly cleared.
    Unset,
}

impl Leaf {
    /// The literal value, or `None` when cleared.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Leaf::Value(value) => Some(value),
            Leaf::Unset => None,
        }
    }
}

/// Hooks that must all be active at once for a value to apply.
///
/// Never empty; only produced by [`flatten`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConditionSet(Vec<String>);

impl ConditionSet {
    /// Hook names in nesting order, outermost first.
    pub fn hooks(&self) -> &[String] {
        &self.0
    }

    /// Convert into a hook condition: the hook itself when there is only
    /// one, their conjunction otherwise.
    pub fn to_condition(&self) -> Condition {
        match self.0.as_slice() {
            [single] => Condition::hook(single.clone()),
            hooks => Condition::and(hooks.iter().cloned().map(Condition::Hook)),
        }
    }
}

/// A value that applies while its condition set holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Hooks that must be active.
    pub conditions: ConditionSet,
    /// The value to apply.
    pub value: Leaf,
}

/// The result of [`flatten`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flattened {
    /// The unconditional value, if the tree has one.
    pub base: Option<Leaf>,
    /// Conditional values, lowest precedence first.
    pub declarations: Vec<Declaration>,
}

/// Flatten a value tree into its base value and conditional declarations.
///
/// The tree is walked with an explicit stack: children are pushed in key
/// order and the last pushed is visited first. Each conditional leaf is
/// placed in front of those found before it, so the final list ends with
/// the first-visited leaf: the last sibling, or the most deeply nested
/// condition under it. Later entries take precedence when compiled.
///
/// ```
/// use horizon_cascade::PropertyValue;
/// use horizon_cascade::resolve::flatten;
///
/// let value = PropertyValue::branch().base("black").on(":hover", "red").on(":focus", "blue");
/// let flat = flatten(&value.into());
///
/// let order: Vec<&str> = flat
///     .declarations
///     .iter()
///     .map(|d| d.conditions.hooks()[0].as_str())
///     .collect();
/// assert_eq!(order, vec![":hover", ":focus"]);
/// ```
pub fn flatten(value: &PropertyValue) -> Flattened {
    let mut flattened = Flattened::default();
    let mut stack: Vec<(Vec<String>, &PropertyValue)> = vec![(vec![], value)];

    while let Some((conditions, current)) = stack.pop() {
        let leaf = match current {
            PropertyValue::Conditional(entries) => {
                for (key, nested) in entries {
                    let mut nested_conditions = conditions.clone();
                    if key != DEFAULT_KEY {
                        nested_conditions.push(key.clone());
                    }
                    stack.push((nested_conditions, nested));
                }
                continue;
            }
            PropertyValue::Value(value) => Leaf::Value(value.clone()),
            PropertyValue::Unset => Leaf::Unset,
        };

        if conditions.is_empty() {
            flattened.base = Some(leaf);
        } else {
            flattened.declarations.push(Declaration {
                conditions: ConditionSet(conditions),
                value: leaf,
            });
        }
    }

    // Declarations were collected highest precedence first.
    flattened.declarations.reverse();
    flattened
}
