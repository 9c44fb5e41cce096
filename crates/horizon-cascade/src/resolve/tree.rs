//! Conditional value trees and style declarations.

use horizon_cascade_hooks::Value;
use indexmap::IndexMap;

use crate::{Error, Result};

/// Key selecting the value used when no sibling hook applies.
pub const DEFAULT_KEY: &str = "default";

/// A property value, possibly conditioned on hooks.
///
/// A conditional value maps [`DEFAULT_KEY`] or hook names to nested values.
/// Nesting a hook inside another means both must be active.
///
/// # Example
///
/// ```
/// use horizon_cascade::PropertyValue;
///
/// // { default: "black", ":hover": { default: "red", ":focus": "blue" } }
/// let color = PropertyValue::branch()
///     .base("black")
///     .on(":hover", PropertyValue::branch().base("red").on(":focus", "blue"));
///
/// assert!(PropertyValue::from(color).is_conditional());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A literal value.
    Value(Value),
    /// Explicitly clear the property.
    Unset,
    /// Values keyed by [`DEFAULT_KEY`] or hook name, in declaration order.
    Conditional(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Start building a conditional value.
    pub fn branch() -> Branch {
        Branch::new()
    }

    /// Check if this value depends on hooks.
    pub fn is_conditional(&self) -> bool {
        matches!(self, PropertyValue::Conditional(_))
    }

    /// Convert a JSON value for `property`.
    ///
    /// `null` clears, strings and numbers are literals and objects are
    /// conditional (key order is preserved).
    pub fn from_json(property: &str, json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Ok(PropertyValue::Unset),
            serde_json::Value::String(s) => Ok(PropertyValue::Value(Value::Text(s.clone()))),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(|n| PropertyValue::Value(Value::Number(n)))
                .ok_or_else(|| Error::invalid_value(property, format!("{n} is not representable"))),
            serde_json::Value::Object(entries) => entries
                .iter()
                .map(|(key, value)| Ok((key.clone(), Self::from_json(property, value)?)))
                .collect::<Result<IndexMap<_, _>>>()
                .map(PropertyValue::Conditional),
            serde_json::Value::Bool(_) | serde_json::Value::Array(_) => Err(Error::invalid_value(
                property,
                "expected a string, number, null or object",
            )),
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        PropertyValue::Value(value)
    }
}

impl From<Branch> for PropertyValue {
    fn from(branch: Branch) -> Self {
        PropertyValue::Conditional(branch.entries)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(PropertyValue::Unset, Into::into)
    }
}

macro_rules! impl_from_literal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::Value(Value::from(value))
                }
            }
        )+
    };
}

impl_from_literal!(&str, String, &String, f64, f32, i32, i64, u32, u64, usize);

/// Builder for conditional values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    entries: IndexMap<String, PropertyValue>,
}

impl Branch {
    /// Create an empty branch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value used when none of the hooks at this level apply.
    pub fn base(mut self, value: impl Into<PropertyValue>) -> Self {
        self.entries.insert(DEFAULT_KEY.to_string(), value.into());
        self
    }

    /// Set the value used while `hook` is active.
    ///
    /// Later hooks take precedence over earlier ones when several are active.
    pub fn on(mut self, hook: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.entries.insert(hook.into(), value.into());
        self
    }
}

/// An ordered set of property values, the input to style compilation.
///
/// # Example
///
/// ```
/// use horizon_cascade::{PropertyValue, StyleDeclaration};
///
/// let decl = StyleDeclaration::new()
///     .set("margin", 0)
///     .set("color", PropertyValue::branch().base("black").on(":hover", "red"))
///     .unset("outline");
/// assert_eq!(decl.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDeclaration {
    properties: IndexMap<String, PropertyValue>,
}

impl StyleDeclaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Re-setting keeps the property's original position.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(property, value);
        self
    }

    /// Explicitly clear a property.
    pub fn unset(self, property: impl Into<String>) -> Self {
        self.set(property, PropertyValue::Unset)
    }

    /// Set a property in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Get a property's value.
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    /// Iterate over properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if no properties are declared.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Build a declaration from a JSON object.
    ///
    /// ```
    /// use horizon_cascade::StyleDeclaration;
    ///
    /// let json = serde_json::json!({
    ///     "color": { "default": "black", ":hover": "red" },
    ///     "margin": 0,
    /// });
    /// let decl = StyleDeclaration::from_json(&json).unwrap();
    /// assert_eq!(decl.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["color", "margin"]);
    /// ```
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let entries = json
            .as_object()
            .ok_or_else(|| Error::invalid_value("<root>", "expected an object of properties"))?;

        entries
            .iter()
            .map(|(property, value)| Ok((property.clone(), PropertyValue::from_json(property, value)?)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for StyleDeclaration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
