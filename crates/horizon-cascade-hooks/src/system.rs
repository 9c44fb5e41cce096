//! The hook system: toggle stylesheet and fallback-chain compiler.

use indexmap::IndexMap;

use crate::condition::Condition;
use crate::ident;
use crate::value::{Value, stringify};
use crate::{Error, Result};

/// Default keyword used when a conditional property has no default value.
pub const DEFAULT_FALLBACK: &str = "revert-layer";

/// Options for a [`HookSystem`].
#[derive(Debug, Clone)]
pub struct HookOptions {
    /// Pretty-print generated CSS and use readable identifiers.
    pub debug: bool,
    /// Keyword substituted for a missing or cleared value inside a chain.
    pub fallback: String,
}

impl Default for HookOptions {
    fn default() -> Self {
        Self {
            debug: false,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

/// One property in the input of [`HookSystem::compile`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyDeclaration {
    /// A value applied unconditionally. `None` clears the property.
    Literal(Option<Value>),
    /// A default plus values that apply while their condition holds.
    ///
    /// Later `on` entries take precedence over earlier ones.
    Conditional {
        default: Option<Value>,
        on: Vec<(Condition, Option<Value>)>,
    },
}

/// Ordered input map for [`HookSystem::compile`].
pub type DeclarationMap = IndexMap<String, PropertyDeclaration>;

/// Ordered output of [`HookSystem::compile`]. `None` marks a cleared property.
pub type CompiledProperties = IndexMap<String, Option<Value>>;

#[derive(Debug, Clone)]
struct HookEntry {
    definition: String,
    id: String,
}

/// Pure-CSS boolean toggles for a fixed set of hooks.
///
/// Every hook owns two custom properties, `--<id>-0` and `--<id>-1`. Exactly
/// one of them holds the guaranteed-invalid value `initial` at any time,
/// which lets `var()` fallbacks select a value without any script running.
///
/// # Example
///
/// ```
/// use horizon_cascade_hooks::{HookOptions, HookSystem, PropertyDeclaration, Condition};
/// use indexmap::IndexMap;
///
/// let system = HookSystem::new([(":hover", "&:hover")], HookOptions::default());
///
/// let mut decls = IndexMap::new();
/// decls.insert(
///     "color".to_string(),
///     PropertyDeclaration::Conditional {
///         default: Some("black".into()),
///         on: vec![(Condition::hook(":hover"), Some("red".into()))],
///     },
/// );
///
/// let compiled = system.compile(&decls).unwrap();
/// let color = compiled["color"].as_ref().unwrap().to_string();
/// assert!(color.starts_with("var(--"));
/// assert!(color.ends_with(",black)"));
/// ```
#[derive(Debug, Clone)]
pub struct HookSystem {
    hooks: IndexMap<String, HookEntry>,
    options: HookOptions,
}

impl HookSystem {
    /// Create a hook system from `(name, definition)` pairs.
    ///
    /// A definition containing `&` is a selector in which `&` stands for the
    /// styled element; any other definition is an at-rule prelude such as
    /// `@media (min-width: 768px)`.
    pub fn new<N, D>(hooks: impl IntoIterator<Item = (N, D)>, options: HookOptions) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        let hooks = hooks
            .into_iter()
            .map(|(name, definition)| {
                let name = name.into();
                let definition = definition.into();
                let id = ident::hook_id(&name, &definition, options.debug);
                (name, HookEntry { definition, id })
            })
            .collect();

        Self { hooks, options }
    }

    /// The options this system was created with.
    pub fn options(&self) -> &HookOptions {
        &self.options
    }

    /// Check whether a hook is defined.
    pub fn has_hook(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// The toggle identifier generated for a hook.
    pub fn hook_id(&self, name: &str) -> Option<&str> {
        self.hooks.get(name).map(|entry| entry.id.as_str())
    }

    /// Iterate over hook names in definition order.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.hooks.keys().map(|s| s.as_str())
    }

    /// Number of defined hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if no hooks are defined.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Generate the stylesheet that drives the hook toggles.
    ///
    /// It must be present once in the document for compiled values to react
    /// to hook state.
    pub fn style_sheet(&self) -> String {
        let (space, newline) = self.whitespace();
        let indent = format!("{space}{space}");

        let mut sheet = format!("*{space}{{{newline}");
        for entry in self.hooks.values() {
            let id = &entry.id;
            sheet.push_str(&format!(
                "{indent}--{id}-0:{space}initial;{newline}{indent}--{id}-1:{space};{newline}"
            ));
        }
        sheet.push_str(&format!("}}{newline}"));

        for entry in self.hooks.values() {
            let id = &entry.id;
            if entry.definition.contains('&') {
                let selector = entry.definition.replace('&', "*");
                sheet.push_str(&format!(
                    "{selector}{space}{{{newline}\
                     {indent}--{id}-0:{space};{newline}\
                     {indent}--{id}-1:{space}initial;{newline}\
                     }}{newline}"
                ));
            } else {
                let prelude = &entry.definition;
                sheet.push_str(&format!(
                    "{prelude}{space}{{{newline}\
                     {indent}*{space}{{{newline}\
                     {indent}{indent}--{id}-0:{space};{newline}\
                     {indent}{indent}--{id}-1:{space}initial;{newline}\
                     {indent}}}{newline}\
                     }}{newline}"
                ));
            }
        }

        sheet
    }

    /// Compile declarations into a flat property map.
    ///
    /// Literal declarations are copied as-is. Conditional declarations become
    /// a chain of `var(<true>, value) var(<false>, previous)` expressions, one
    /// link per `on` entry, innermost being the default. Helper properties for
    /// compound conditions are inserted before the first property using them.
    pub fn compile(&self, declarations: &DeclarationMap) -> Result<CompiledProperties> {
        let (space, _) = self.whitespace();
        let fallback = &self.options.fallback;
        let mut compiled = CompiledProperties::with_capacity(declarations.len());

        for (property, declaration) in declarations {
            let (default, on) = match declaration {
                PropertyDeclaration::Literal(value) => {
                    compiled.insert(property.clone(), value.clone());
                    continue;
                }
                PropertyDeclaration::Conditional { default, on } if on.is_empty() => {
                    compiled.insert(property.clone(), default.clone());
                    continue;
                }
                PropertyDeclaration::Conditional { default, on } => (default, on),
            };

            let render = |value: &Option<Value>| {
                value
                    .as_ref()
                    .map_or_else(|| fallback.clone(), |v| stringify(property, v))
            };

            let mut expression = render(default);
            for (condition, value) in on {
                let (when_true, when_false) = self.resolve_condition(condition, &mut compiled)?;
                expression = format!(
                    "var({when_true},{space}{}) var({when_false},{space}{expression})",
                    render(value)
                );
            }

            tracing::trace!("Compiled '{}' to {}", property, expression);
            compiled.insert(property.clone(), Some(Value::Text(expression)));
        }

        Ok(compiled)
    }

    /// Resolve a condition into its (true, false) toggle property names,
    /// emitting helper properties for compound conditions.
    fn resolve_condition(
        &self,
        condition: &Condition,
        compiled: &mut CompiledProperties,
    ) -> Result<(String, String)> {
        let (items, is_and) = match condition {
            Condition::Hook(name) => {
                let entry = self.hooks.get(name).ok_or_else(|| Error::unknown_hook(name))?;
                return Ok((format!("--{}-1", entry.id), format!("--{}-0", entry.id)));
            }
            Condition::Not(inner) => {
                let (when_true, when_false) = self.resolve_condition(inner, compiled)?;
                return Ok((when_false, when_true));
            }
            Condition::And(items) => (items, true),
            Condition::Or(items) => (items, false),
        };

        match items.as_slice() {
            [] => {
                return Err(Error::EmptyCondition {
                    operator: if is_and { "and" } else { "or" },
                });
            }
            [single] => return self.resolve_condition(single, compiled),
            _ => {}
        }

        let operands = items
            .iter()
            .map(|item| self.resolve_condition(item, compiled))
            .collect::<Result<Vec<_>>>()?;

        let id = ident::condition_id(&condition.to_string());
        let when_true = format!("--{id}-1");
        let when_false = format!("--{id}-0");

        // A conjunction is false if any operand is false (any invalid var()
        // poisons the whole value) and true only if every nested fallback
        // reaches an invalid var(). Disjunction is the mirror image.
        let trues: Vec<&str> = operands.iter().map(|(t, _)| t.as_str()).collect();
        let falses: Vec<&str> = operands.iter().map(|(_, f)| f.as_str()).collect();
        let (true_value, false_value) = if is_and {
            (self.nested_vars(&trues), joined_vars(&falses))
        } else {
            (joined_vars(&trues), self.nested_vars(&falses))
        };

        if !compiled.contains_key(&when_false) {
            compiled.insert(when_false.clone(), Some(Value::Text(false_value)));
        }
        if !compiled.contains_key(&when_true) {
            compiled.insert(when_true.clone(), Some(Value::Text(true_value)));
        }

        Ok((when_true, when_false))
    }

    /// `var(a, var(b, var(c)))`
    fn nested_vars(&self, names: &[&str]) -> String {
        let (space, _) = self.whitespace();
        let mut names = names.iter().rev();
        let mut nested = names.next().map(|n| format!("var({n})")).unwrap_or_default();
        for name in names {
            nested = format!("var({name},{space}{nested})");
        }
        nested
    }

    fn whitespace(&self) -> (&'static str, &'static str) {
        if self.options.debug { (" ", "\n") } else { ("", "") }
    }
}

/// `var(a) var(b) var(c)`
fn joined_vars(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("var({name})"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug_system(hooks: &[(&str, &str)]) -> HookSystem {
        HookSystem::new(
            hooks.iter().copied(),
            HookOptions {
                debug: true,
                ..Default::default()
            },
        )
    }

    fn conditional(default: Option<&str>, on: Vec<(Condition, Option<&str>)>) -> PropertyDeclaration {
        PropertyDeclaration::Conditional {
            default: default.map(Value::from),
            on: on.into_iter().map(|(c, v)| (c, v.map(Value::from))).collect(),
        }
    }

    fn text(compiled: &CompiledProperties, key: &str) -> String {
        compiled[key].as_ref().unwrap().to_string()
    }

    #[test]
    fn empty_style_sheet() {
        assert_eq!(debug_system(&[]).style_sheet(), "* {\n}\n");
        assert_eq!(HookSystem::new(Vec::<(String, String)>::new(), HookOptions::default()).style_sheet(), "*{}");
    }

    #[test]
    fn selector_hook_style_sheet() {
        let system = debug_system(&[(":hover", "&:hover")]);
        let id = system.hook_id(":hover").unwrap();

        let expected = format!(
            "* {{\n  --{id}-0: initial;\n  --{id}-1: ;\n}}\n\
             *:hover {{\n  --{id}-0: ;\n  --{id}-1: initial;\n}}\n"
        );
        assert_eq!(system.style_sheet(), expected);
    }

    #[test]
    fn at_rule_hook_style_sheet() {
        let system = HookSystem::new([("@media (width >= 600px)", "@media (width >= 600px)")], HookOptions::default());
        let id = system.hook_id("@media (width >= 600px)").unwrap();

        let expected = format!(
            "*{{--{id}-0:initial;--{id}-1:;}}@media (width >= 600px){{*{{--{id}-0:;--{id}-1:initial;}}}}"
        );
        assert_eq!(system.style_sheet(), expected);
    }

    #[test]
    fn literals_pass_through() {
        let system = debug_system(&[]);
        let mut decls = DeclarationMap::new();
        decls.insert("margin".into(), PropertyDeclaration::Literal(Some(Value::from(0))));
        decls.insert("color".into(), PropertyDeclaration::Literal(None));

        let compiled = system.compile(&decls).unwrap();
        assert_eq!(compiled["margin"], Some(Value::Number(0.0)));
        assert_eq!(compiled["color"], None);
    }

    #[test]
    fn single_hook_chain() {
        let system = debug_system(&[(":hover", "&:hover")]);
        let h = system.hook_id(":hover").unwrap().to_string();

        let mut decls = DeclarationMap::new();
        decls.insert("color".into(), conditional(Some("black"), vec![(":hover".into(), Some("red"))]));

        let compiled = system.compile(&decls).unwrap();
        assert_eq!(text(&compiled, "color"), format!("var(--{h}-1, red) var(--{h}-0, black)"));
    }

    #[test]
    fn later_entries_wrap_earlier_ones() {
        let system = debug_system(&[(":hover", "&:hover"), (":focus", "&:focus")]);
        let h = system.hook_id(":hover").unwrap().to_string();
        let f = system.hook_id(":focus").unwrap().to_string();

        let mut decls = DeclarationMap::new();
        decls.insert(
            "color".into(),
            conditional(
                Some("black"),
                vec![(":hover".into(), Some("red")), (":focus".into(), Some("blue"))],
            ),
        );

        let compiled = system.compile(&decls).unwrap();
        assert_eq!(
            text(&compiled, "color"),
            format!("var(--{f}-1, blue) var(--{f}-0, var(--{h}-1, red) var(--{h}-0, black))")
        );
    }

    #[test]
    fn conjunction_emits_helpers_first() {
        let system = debug_system(&[(":hover", "&:hover"), (":focus", "&:focus")]);
        let h = system.hook_id(":hover").unwrap().to_string();
        let f = system.hook_id(":focus").unwrap().to_string();
        let both = Condition::and([":hover".into(), ":focus".into()]);

        let mut decls = DeclarationMap::new();
        decls.insert(
            "color".into(),
            conditional(Some("black"), vec![(":hover".into(), Some("red")), (both, Some("blue"))]),
        );

        let compiled = system.compile(&decls).unwrap();
        let keys: Vec<&str> = compiled.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys[0].starts_with("--cond-") && keys[0].ends_with("-0"));
        assert!(keys[1].starts_with("--cond-") && keys[1].ends_with("-1"));
        assert_eq!(keys[2], "color");

        assert_eq!(text(&compiled, keys[0]), format!("var(--{h}-0) var(--{f}-0)"));
        assert_eq!(text(&compiled, keys[1]), format!("var(--{h}-1, var(--{f}-1))"));
        assert_eq!(
            text(&compiled, "color"),
            format!(
                "var({}, blue) var({}, var(--{h}-1, red) var(--{h}-0, black))",
                keys[1], keys[0]
            )
        );
    }

    #[test]
    fn helpers_are_shared_between_properties() {
        let system = debug_system(&[(":hover", "&:hover"), (":focus", "&:focus")]);
        let both = Condition::and([":hover".into(), ":focus".into()]);

        let mut decls = DeclarationMap::new();
        decls.insert("color".into(), conditional(None, vec![(both.clone(), Some("red"))]));
        decls.insert("outlineColor".into(), conditional(None, vec![(both, Some("red"))]));

        let compiled = system.compile(&decls).unwrap();
        assert_eq!(compiled.len(), 4);
    }

    #[test]
    fn disjunction_and_negation() {
        let system = debug_system(&[(":hover", "&:hover"), (":focus", "&:focus")]);
        let h = system.hook_id(":hover").unwrap().to_string();
        let f = system.hook_id(":focus").unwrap().to_string();

        let mut decls = DeclarationMap::new();
        decls.insert(
            "color".into(),
            conditional(Some("black"), vec![(Condition::or([":hover".into(), ":focus".into()]), Some("red"))]),
        );
        decls.insert(
            "opacity".into(),
            conditional(Some("1"), vec![(Condition::not(":hover".into()), Some("0.5"))]),
        );

        let compiled = system.compile(&decls).unwrap();
        let keys: Vec<&str> = compiled.keys().map(|k| k.as_str()).collect();
        assert_eq!(text(&compiled, keys[0]), format!("var(--{h}-0, var(--{f}-0))"));
        assert_eq!(text(&compiled, keys[1]), format!("var(--{h}-1) var(--{f}-1)"));
        assert_eq!(
            text(&compiled, "opacity"),
            format!("var(--{h}-0, 0.5) var(--{h}-1, 1)")
        );
    }

    #[test]
    fn missing_default_uses_fallback() {
        let system = debug_system(&[(":hover", "&:hover")]);
        let h = system.hook_id(":hover").unwrap().to_string();

        let mut decls = DeclarationMap::new();
        decls.insert("color".into(), conditional(None, vec![(":hover".into(), Some("red"))]));
        decls.insert("background".into(), conditional(Some("white"), vec![(":hover".into(), None)]));

        let compiled = system.compile(&decls).unwrap();
        assert_eq!(text(&compiled, "color"), format!("var(--{h}-1, red) var(--{h}-0, revert-layer)"));
        assert_eq!(
            text(&compiled, "background"),
            format!("var(--{h}-1, revert-layer) var(--{h}-0, white)")
        );
    }

    #[test]
    fn numbers_in_chains_get_units() {
        let system = debug_system(&[(":hover", "&:hover")]);
        let h = system.hook_id(":hover").unwrap().to_string();

        let mut decls = DeclarationMap::new();
        decls.insert(
            "marginLeft".into(),
            PropertyDeclaration::Conditional {
                default: Some(Value::from(0)),
                on: vec![(":hover".into(), Some(Value::from(10)))],
            },
        );

        let compiled = system.compile(&decls).unwrap();
        assert_eq!(text(&compiled, "marginLeft"), format!("var(--{h}-1, 10px) var(--{h}-0, 0px)"));
    }

    #[test]
    fn compact_output() {
        let system = HookSystem::new([(":hover", "&:hover")], HookOptions::default());
        let h = system.hook_id(":hover").unwrap().to_string();

        let mut decls = DeclarationMap::new();
        decls.insert("color".into(), conditional(Some("black"), vec![(":hover".into(), Some("red"))]));

        let compiled = system.compile(&decls).unwrap();
        assert_eq!(text(&compiled, "color"), format!("var(--{h}-1,red) var(--{h}-0,black)"));
    }

    #[test]
    fn unknown_hook_is_rejected() {
        let system = debug_system(&[(":hover", "&:hover")]);
        let mut decls = DeclarationMap::new();
        decls.insert("color".into(), conditional(Some("black"), vec![(":active".into(), Some("red"))]));

        assert_eq!(system.compile(&decls), Err(Error::unknown_hook(":active")));
    }

    #[test]
    fn empty_compound_is_rejected() {
        let system = debug_system(&[]);
        let mut decls = DeclarationMap::new();
        decls.insert("color".into(), conditional(None, vec![(Condition::and([]), Some("red"))]));

        assert_eq!(
            system.compile(&decls),
            Err(Error::EmptyCondition { operator: "and" })
        );
    }
}
