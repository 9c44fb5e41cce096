//! Ordered merging of resolved styles.

use horizon_cascade_hooks::{Value, hyphenate, stringify};
use indexmap::IndexMap;

use super::{Style, Theme};
use crate::vars::VarGroup;

/// An argument to [`merge`]: a style, a nested list of styles, or nothing.
///
/// `None` entries are skipped, which makes conditional styling concise:
///
/// ```
/// use horizon_cascade::{StyleDeclaration, StyleEngine, StyleProp, merge};
///
/// let engine = StyleEngine::builder().build().unwrap();
/// let base = engine.inline(&StyleDeclaration::new().set("color", "black")).unwrap();
/// let active = engine.inline(&StyleDeclaration::new().set("color", "blue")).unwrap();
///
/// let is_active = false;
/// let props = merge([StyleProp::from(&base), StyleProp::from(is_active.then_some(&active))]);
/// assert_eq!(props.value("color").unwrap().to_string(), "black");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StyleProp {
    /// A single style.
    Style(Style),
    /// Styles applied in order.
    List(Vec<StyleProp>),
    /// Nothing to apply.
    #[default]
    None,
}

impl From<Style> for StyleProp {
    fn from(style: Style) -> Self {
        StyleProp::Style(style)
    }
}

impl From<&Style> for StyleProp {
    fn from(style: &Style) -> Self {
        StyleProp::Style(style.clone())
    }
}

impl From<Theme> for StyleProp {
    fn from(theme: Theme) -> Self {
        StyleProp::Style(theme.into_style())
    }
}

impl From<&Theme> for StyleProp {
    fn from(theme: &Theme) -> Self {
        StyleProp::Style(theme.as_style().clone())
    }
}

/// A variable group contributes the helper properties its defaults need.
impl From<&VarGroup> for StyleProp {
    fn from(group: &VarGroup) -> Self {
        StyleProp::Style(group.helpers().clone())
    }
}

impl<T: Into<StyleProp>> From<Option<T>> for StyleProp {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleProp::None, Into::into)
    }
}

impl<T: Into<StyleProp>> From<Vec<T>> for StyleProp {
    fn from(values: Vec<T>) -> Self {
        StyleProp::List(values.into_iter().map(Into::into).collect())
    }
}

/// The flat result of [`merge`], ready to be used as an element's inline style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    properties: IndexMap<String, Option<Value>>,
}

impl InlineStyle {
    /// Look up a property. `Some(None)` means the property was cleared.
    pub fn get(&self, property: &str) -> Option<Option<&Value>> {
        self.properties.get(property).map(Option::as_ref)
    }

    /// The property's value, if it is set to one.
    pub fn value(&self, property: &str) -> Option<&Value> {
        self.get(property).flatten()
    }

    /// Iterate over properties in their final order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Property names in their final order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(|k| k.as_str())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render as a CSS declaration list for a `style` attribute.
    ///
    /// Cleared properties are omitted.
    ///
    /// ```
    /// use horizon_cascade::{StyleDeclaration, StyleEngine, props};
    ///
    /// let engine = StyleEngine::builder().build().unwrap();
    /// let style = engine
    ///     .inline(&StyleDeclaration::new().set("marginLeft", 4).set("zIndex", 2).unset("color"))
    ///     .unwrap();
    /// assert_eq!(props!(&style).to_css_declarations(), "margin-left:4px;z-index:2;");
    /// ```
    pub fn to_css_declarations(&self) -> String {
        self.properties
            .iter()
            .filter_map(|(property, value)| {
                let value = value.as_ref()?;
                Some(format!("{}:{};", hyphenate(property), stringify(property, value)))
            })
            .collect()
    }

    fn apply(&mut self, prop: &StyleProp) {
        match prop {
            StyleProp::None => {}
            StyleProp::List(items) => {
                for item in items {
                    self.apply(item);
                }
            }
            StyleProp::Style(style) => {
                for (property, value) in style.iter() {
                    // Re-append so the key takes the position of its latest writer.
                    self.properties.shift_remove(property);
                    self.properties.insert(property.to_string(), value.cloned());
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a InlineStyle {
    type Item = (&'a String, &'a Option<Value>);
    type IntoIter = indexmap::map::Iter<'a, String, Option<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Merge styles into a single inline style.
///
/// Arguments are applied in order, nested lists depth-first, `None` entries
/// skipped. A later style overrides earlier values and also moves each of
/// its keys to the end, so the result's key order is the order in which
/// properties were last written. This reproduces the cascade of rules
/// listed in the same order without relying on specificity.
///
/// See also the [`props!`](crate::props) macro.
pub fn merge<I>(styles: I) -> InlineStyle
where
    I: IntoIterator,
    I::Item: Into<StyleProp>,
{
    let mut merged = InlineStyle::default();
    for prop in styles {
        merged.apply(&prop.into());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_cascade_hooks::CompiledProperties;

    fn style(entries: &[(&str, Option<f64>)]) -> Style {
        let properties: CompiledProperties = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(Value::Number)))
            .collect();
        Style::from_properties(properties)
    }

    fn keys(merged: &InlineStyle) -> Vec<&str> {
        merged.keys().collect()
    }

    #[test]
    fn single_style_keeps_order() {
        let a = style(&[("margin", Some(0.0)), ("marginLeft", Some(0.0)), ("marginRight", Some(0.0))]);
        assert_eq!(keys(&merge([&a])), vec!["margin", "marginLeft", "marginRight"]);
    }

    #[test]
    fn last_writer_sets_position() {
        let a = style(&[("margin", Some(0.0)), ("marginLeft", Some(0.0)), ("marginRight", Some(0.0))]);
        let b = style(&[("margin", Some(0.0)), ("marginRight", Some(0.0)), ("marginLeft", Some(0.0))]);
        let c = style(&[("marginLeft", Some(0.0)), ("marginRight", Some(0.0)), ("margin", Some(0.0))]);

        assert_eq!(keys(&merge([&a, &b])), keys(&merge([&b])));
        assert_eq!(keys(&merge([&a, &b, &c])), vec!["marginLeft", "marginRight", "margin"]);
    }

    #[test]
    fn partial_override_moves_only_its_keys() {
        let a = style(&[("margin", Some(0.0)), ("marginLeft", Some(0.0)), ("marginRight", Some(0.0))]);
        let d = style(&[("marginLeft", Some(10.0))]);

        let merged = merge([&a, &d]);
        assert_eq!(keys(&merged), vec!["margin", "marginRight", "marginLeft"]);
        assert_eq!(merged.value("marginLeft"), Some(&Value::Number(10.0)));
    }

    #[test]
    fn cleared_value_overrides() {
        let a = style(&[("color", Some(1.0)), ("margin", Some(0.0))]);
        let b = style(&[("color", None)]);

        let merged = merge([&a, &b]);
        assert_eq!(keys(&merged), vec!["margin", "color"]);
        assert_eq!(merged.get("color"), Some(None));
        assert_eq!(merged.get("padding"), None);
    }

    #[test]
    fn nested_lists_and_nones_flatten_in_order() {
        let a = style(&[("a", Some(1.0))]);
        let b = style(&[("a", Some(2.0)), ("b", Some(2.0))]);
        let c = style(&[("a", Some(3.0))]);

        let merged = merge([
            StyleProp::from(&a),
            StyleProp::None,
            StyleProp::from(vec![StyleProp::from(&b), StyleProp::from(vec![None, Some(&c)])]),
        ]);

        assert_eq!(keys(&merged), vec!["b", "a"]);
        assert_eq!(merged.value("a"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn empty_merge() {
        assert!(merge(Vec::<StyleProp>::new()).is_empty());
    }
}
