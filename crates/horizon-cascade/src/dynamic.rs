//! Styles parameterised at render time.

use horizon_cascade_hooks::Value;

use crate::style::Style;
use crate::{Error, Result};

/// A style compiled once against parameter placeholders.
///
/// Each parameter is a generated custom property. Applying arguments yields
/// the compiled style followed by the parameter assignments, so changing an
/// argument never requires recompiling.
///
/// ```
/// use horizon_cascade::{PropertyValue, StyleDeclaration, StyleEngine};
///
/// let engine = StyleEngine::builder().hook(":hover").build().unwrap();
/// let swatch = engine
///     .create_dynamic(1, |params| {
///         StyleDeclaration::new().set(
///             "backgroundColor",
///             PropertyValue::branch().base(params[0].as_str()).on(":hover", "white"),
///         )
///     })
///     .unwrap();
///
/// let style = swatch.apply(["tomato"]).unwrap();
/// assert_eq!(style.value(&swatch.params()[0]).unwrap().to_string(), "tomato");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicStyle {
    style: Style,
    params: Vec<String>,
}

impl DynamicStyle {
    pub(crate) fn new(style: Style, params: Vec<String>) -> Self {
        Self { style, params }
    }

    /// Number of arguments [`apply`](Self::apply) expects.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Generated custom property names, one per parameter.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The compiled style, without argument assignments.
    pub fn template(&self) -> &Style {
        &self.style
    }

    /// Produce a style for the given arguments.
    pub fn apply<V: Into<Value>>(&self, args: impl IntoIterator<Item = V>) -> Result<Style> {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        if args.len() != self.params.len() {
            return Err(Error::ArityMismatch {
                expected: self.params.len(),
                actual: args.len(),
            });
        }

        Ok(self.style.extended(
            self.params
                .iter()
                .cloned()
                .zip(args.into_iter().map(Some)),
        ))
    }
}
