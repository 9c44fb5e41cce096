//! The style engine.

use horizon_cascade_hooks::{HookOptions, stringify};
use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::config::{EngineBuilder, EngineConfig};
use crate::dynamic::DynamicStyle;
use crate::hooks::{HookName, HookRegistry};
use crate::keyframes::{KeyframeRegistry, Keyframes};
use crate::resolve::{CascadeCompiler, StyleDeclaration};
use crate::style::{Style, StyleSet, Theme};
use crate::vars::{VarGroup, VariableTable};
use crate::{Error, Result};

/// A configured style engine.
///
/// The engine owns the hook registry, the custom property allocator and the
/// keyframes registry. All operations take `&self`; the allocators are
/// guarded by locks, so an engine can be shared between threads.
///
/// # Example
///
/// ```
/// use horizon_cascade::{PropertyValue, StyleDeclaration, StyleEngine, props};
///
/// let engine = StyleEngine::builder().hook(":hover").debug(true).build().unwrap();
///
/// let button = engine
///     .inline(
///         &StyleDeclaration::new()
///             .set("color", PropertyValue::branch().base("black").on(":hover", "red")),
///     )
///     .unwrap();
///
/// let style = props!(&button);
/// assert!(style.value("color").unwrap().to_string().starts_with("var(--_hover-"));
/// assert!(engine.style_sheet().contains("*:hover {"));
/// ```
#[derive(Debug)]
pub struct StyleEngine {
    config: EngineConfig,
    registry: HookRegistry,
    variables: Mutex<VariableTable>,
    keyframes: KeyframeRegistry,
}

impl StyleEngine {
    /// Create an engine from a configuration.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let registry = HookRegistry::new(
            config.hooks.iter().cloned(),
            HookOptions {
                debug: config.debug,
                fallback: config.fallback.clone(),
            },
        )?;
        let keyframes = KeyframeRegistry::new(config.prefix.clone(), config.debug);

        tracing::debug!(
            "Created style engine with {} hook(s), prefix '{}'",
            registry.len(),
            config.prefix
        );

        Ok(Self {
            config,
            registry,
            variables: Mutex::new(VariableTable::default()),
            keyframes,
        })
    }

    /// Start building an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The configuration this engine was created with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The hook registry.
    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Configured hooks in registration order.
    pub fn hooks(&self) -> &[HookName] {
        self.registry.hooks()
    }

    /// A compiler bound to this engine's hooks.
    pub fn compiler(&self) -> CascadeCompiler<'_> {
        CascadeCompiler::new(&self.registry)
    }

    /// The hook toggle stylesheet. Embed it once per document.
    pub fn style_sheet(&self) -> String {
        self.registry.style_sheet()
    }

    /// Compile a single declaration.
    pub fn inline(&self, declaration: &StyleDeclaration) -> Result<Style> {
        self.compiler().compile(declaration)
    }

    /// Compile several named declarations.
    ///
    /// Fails on the first declaration that does not compile.
    pub fn create<K: Into<String>>(
        &self,
        declarations: impl IntoIterator<Item = (K, StyleDeclaration)>,
    ) -> Result<StyleSet> {
        let compiler = self.compiler();
        let styles = declarations
            .into_iter()
            .map(|(name, declaration)| Ok((name.into(), compiler.compile(&declaration)?)))
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(StyleSet::new(styles))
    }

    /// Compile a declaration against `arity` parameters.
    ///
    /// `declare` receives one `var(--param)` expression per parameter and
    /// returns the declaration to compile.
    pub fn create_dynamic<F>(&self, arity: usize, declare: F) -> Result<DynamicStyle>
    where
        F: FnOnce(&[String]) -> StyleDeclaration,
    {
        let params: Vec<String> = {
            let mut variables = self.variables.lock();
            (0..arity).map(|_| variables.allocate(&self.config.prefix)).collect()
        };
        let placeholders: Vec<String> = params.iter().map(|name| format!("var({name})")).collect();

        let style = self.inline(&declare(&placeholders))?;
        Ok(DynamicStyle::new(style, params))
    }

    /// Define a group of custom properties with default values.
    ///
    /// Each key gets a fresh custom property. The returned group maps keys to
    /// `var(--name, default)` expressions; conditional defaults compile to
    /// fallback chains like any other value.
    ///
    /// Keys are not CSS properties, so numeric defaults are written without
    /// a unit: `gap: 8` renders as `var(--name, 8)`. Give lengths as text
    /// (`"8px"`) when the variable will be used by a length property.
    pub fn define_vars(&self, defaults: &StyleDeclaration) -> Result<VarGroup> {
        let compiler = self.compiler();
        let (space, _) = self.whitespace();

        let mut variables = self.variables.lock();
        let mut vars = IndexMap::with_capacity(defaults.len());
        let mut helpers = IndexMap::new();
        let mut issued = Vec::with_capacity(defaults.len());

        for (key, value) in defaults.iter() {
            let name = variables.allocate(&self.config.prefix);
            let mut compiled = compiler
                .compile_properties(&StyleDeclaration::new().set(name.clone(), value.clone()))?;

            let expression = match compiled.shift_remove(&name).flatten() {
                Some(default) => format!("var({name},{space}{})", stringify(&name, &default)),
                None => format!("var({name})"),
            };
            helpers.extend(compiled);

            tracing::debug!("Allocated '{}' for variable '{}'", name, key);
            vars.insert(key.to_string(), expression.clone());
            issued.push((expression, name));
        }

        for (expression, name) in issued {
            variables.record(expression, name);
        }

        Ok(VarGroup::new(vars, Style::from_properties(helpers)))
    }

    /// Compile overrides for a variable group into a theme.
    ///
    /// Every override key must be defined by `group`, and `group` must have
    /// been created by this engine.
    pub fn create_theme(&self, group: &VarGroup, overrides: &StyleDeclaration) -> Result<Theme> {
        let mut declaration = StyleDeclaration::new();
        {
            let variables = self.variables.lock();
            for (key, value) in overrides.iter() {
                let expression = group.get(key).ok_or_else(|| Error::UnknownVariable {
                    key: key.to_string(),
                })?;
                let name = variables.lookup(expression).ok_or_else(|| Error::ForeignVariable {
                    expression: expression.to_string(),
                })?;
                declaration.insert(name, value.clone());
            }
        }

        Ok(Theme::new(self.inline(&declaration)?))
    }

    /// Register a keyframe animation and return its name.
    pub fn keyframes(&self, keyframes: &Keyframes) -> String {
        self.keyframes.keyframes(keyframes)
    }

    /// The `@keyframes` blocks for `names`, in the order given.
    pub fn keyframes_style_sheet<S: AsRef<str>>(&self, names: &[S]) -> Result<String> {
        self.keyframes.style_sheet(names)
    }

    /// The keyframes registry.
    pub fn keyframe_registry(&self) -> &KeyframeRegistry {
        &self.keyframes
    }

    fn whitespace(&self) -> (&'static str, &'static str) {
        if self.config.debug { (" ", "\n") } else { ("", "") }
    }
}
