//! Literal property values and their CSS text form.

use std::fmt;

/// A literal property value.
///
/// Numbers are kept as numbers until they are written into CSS text, at
/// which point [`stringify`] decides whether they need a `px` unit.
///
/// # Example
///
/// ```
/// use horizon_cascade_hooks::{Value, stringify};
///
/// assert_eq!(stringify("top", &Value::from(10)), "10px");
/// assert_eq!(stringify("opacity", &Value::from(0.5)), "0.5");
/// assert_eq!(stringify("color", &Value::from("red")), "red");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain number, unit decided by the property.
    Number(f64),
    /// Verbatim CSS text.
    Text(String),
}

impl Value {
    /// Get the number if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Get the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(value as f64)
                }
            }
        )+
    };
}

impl_from_number!(f64, f32, i32, i64, u32, u64, usize);

/// Properties whose numeric values carry no unit.
///
/// Names are camelCase with any vendor prefix removed.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "aspectRatio",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "fillOpacity",
    "flex",
    "flexGrow",
    "flexNegative",
    "flexOrder",
    "flexPositive",
    "flexShrink",
    "floodOpacity",
    "fontWeight",
    "gridArea",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "scale",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
];

/// Check whether numeric values of `property` are written without a unit.
///
/// Accepts camelCase (`zIndex`), kebab-case (`z-index`) and vendor-prefixed
/// (`WebkitLineClamp`, `-webkit-line-clamp`) names. Custom properties are
/// always unitless.
pub fn is_unitless(property: &str) -> bool {
    if property.starts_with("--") {
        return true;
    }

    let camel = camelize(property);
    let unprefixed = strip_vendor_prefix(&camel);
    UNITLESS_PROPERTIES.contains(&unprefixed.as_str())
}

/// Render a value as CSS text for the given property.
pub fn stringify(property: &str, value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Number(n) if is_unitless(property) => format!("{}", n),
        Value::Number(n) => format!("{}px", n),
    }
}

/// Convert a camelCase property name into its CSS (kebab-case) form.
///
/// Vendor prefixes written as `Webkit`/`Moz`/`O` gain a leading dash, `ms`
/// included. Names that already start with `-` are returned unchanged.
pub fn hyphenate(property: &str) -> String {
    if property.starts_with('-') {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn camelize(property: &str) -> String {
    if !property.contains('-') {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.trim_start_matches('-').chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn strip_vendor_prefix(property: &str) -> String {
    for prefix in ["Webkit", "webkit", "Moz", "moz", "ms", "O"] {
        if let Some(rest) = property.strip_prefix(prefix) {
            let mut chars = rest.chars();
            if let Some(first) = chars.next().filter(|c| c.is_ascii_uppercase()) {
                return first.to_ascii_lowercase().to_string() + chars.as_str();
            }
        }
    }
    property.to_string()
}
