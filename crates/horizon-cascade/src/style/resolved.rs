//! Resolved style values.

use std::ops::Index;
use std::sync::Arc;

use horizon_cascade_hooks::{CompiledProperties, Value};
use indexmap::IndexMap;

/// A compiled, immutable style.
///
/// Maps property names (including custom properties) to literal values or
/// fallback expressions, in declaration order. A `None` value means the
/// property is explicitly cleared. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    properties: Arc<CompiledProperties>,
}

impl Style {
    pub(crate) fn from_properties(properties: CompiledProperties) -> Self {
        Self {
            properties: Arc::new(properties),
        }
    }

    /// Look up a property.
    ///
    /// Returns `None` when the style does not mention the property and
    /// `Some(None)` when it clears it.
    pub fn get(&self, property: &str) -> Option<Option<&Value>> {
        self.properties.get(property).map(Option::as_ref)
    }

    /// The property's value, if it is set to one.
    pub fn value(&self, property: &str) -> Option<&Value> {
        self.get(property).flatten()
    }

    /// Check whether the style mentions a property.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Iterate over properties in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Property names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_str())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the style has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// A copy of this style with extra properties appended.
    pub(crate) fn extended(&self, extra: impl IntoIterator<Item = (String, Option<Value>)>) -> Self {
        let mut properties = (*self.properties).clone();
        properties.extend(extra);
        Self::from_properties(properties)
    }
}

/// Custom-property overrides for a variable group.
///
/// A theme is a [`Style`] whose keys are custom properties; it merges like
/// any other style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    style: Style,
}

impl Theme {
    pub(crate) fn new(style: Style) -> Self {
        Self { style }
    }

    /// The overrides as a style.
    pub fn as_style(&self) -> &Style {
        &self.style
    }

    /// Convert into the underlying style.
    pub fn into_style(self) -> Style {
        self.style
    }
}

/// Named styles created together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSet {
    styles: IndexMap<String, Style>,
}

impl StyleSet {
    pub(crate) fn new(styles: IndexMap<String, Style>) -> Self {
        Self { styles }
    }

    /// Get a style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Iterate over styles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Index<&str> for StyleSet {
    type Output = Style;

    /// Panics if no style has that name.
    fn index(&self, name: &str) -> &Style {
        &self.styles[name]
    }
}
