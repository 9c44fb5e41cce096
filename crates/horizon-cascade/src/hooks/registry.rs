//! The hook registry.

use horizon_cascade_hooks::{CompiledProperties, DeclarationMap, HookOptions, HookSystem};

use super::HookName;
use crate::{Error, Result};

/// The ordered set of hooks an engine was configured with.
///
/// Created once per engine and never mutated. Registration order matters:
/// it is the order of the rules in the toggle stylesheet.
#[derive(Debug, Clone)]
pub struct HookRegistry {
    hooks: Vec<HookName>,
    system: HookSystem,
}

impl HookRegistry {
    /// Validate and register hooks.
    ///
    /// Malformed names are rejected. A name registered twice keeps its first
    /// position; the duplicate is skipped with a warning.
    pub fn new<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        options: HookOptions,
    ) -> Result<Self> {
        let mut hooks: Vec<HookName> = vec![];
        for name in names {
            let hook = HookName::parse(name)?;
            if hooks.contains(&hook) {
                tracing::warn!("Skipping duplicate hook '{}'", hook);
                continue;
            }
            hooks.push(hook);
        }

        let system = HookSystem::new(
            hooks.iter().map(|hook| (hook.as_str(), hook.definition())),
            options,
        );

        tracing::debug!("Registered {} hook(s)", hooks.len());
        Ok(Self { hooks, system })
    }

    /// Registered hooks in order.
    pub fn hooks(&self) -> &[HookName] {
        &self.hooks
    }

    /// Check whether a hook is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.system.has_hook(name)
    }

    /// Fail with [`Error::UnknownHook`] unless `name` is registered.
    pub fn check(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(Error::unknown_hook(name))
        }
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Whether debug output is enabled.
    pub fn is_debug(&self) -> bool {
        self.system.options().debug
    }

    /// The underlying hook system.
    pub fn system(&self) -> &HookSystem {
        &self.system
    }

    /// The toggle stylesheet for all registered hooks.
    pub fn style_sheet(&self) -> String {
        self.system.style_sheet()
    }

    /// Compile a declaration map into flat properties.
    pub fn compile(&self, declarations: &DeclarationMap) -> Result<CompiledProperties> {
        Ok(self.system.compile(declarations)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug_options() -> HookOptions {
        HookOptions {
            debug: true,
            ..Default::default()
        }
    }

    #[test]
    fn empty_registry_style_sheet() {
        let registry = HookRegistry::new(Vec::<String>::new(), debug_options()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.style_sheet(), "* {\n}\n");
    }

    #[test]
    fn keeps_order_and_skips_duplicates() {
        let registry =
            HookRegistry::new([":hover", ":focus", ":hover"], debug_options()).unwrap();
        let names: Vec<&str> = registry.hooks().iter().map(|h| h.as_str()).collect();
        assert_eq!(names, vec![":hover", ":focus"]);
    }

    #[test]
    fn style_sheet_follows_registration_order() {
        let registry = HookRegistry::new([":focus", ":hover"], debug_options()).unwrap();
        let sheet = registry.style_sheet();
        let focus = sheet.find("*:focus {").unwrap();
        let hover = sheet.find("*:hover {").unwrap();
        assert!(focus < hover);
    }

    #[test]
    fn media_hooks_wrap_a_universal_rule() {
        let registry =
            HookRegistry::new(["@media (min-width: 768px)"], debug_options()).unwrap();
        assert!(registry.style_sheet().contains("@media (min-width: 768px) {\n  * {\n"));
    }

    #[test]
    fn invalid_hook_fails_creation() {
        let err = HookRegistry::new([":hover", "hover"], debug_options()).unwrap_err();
        assert_eq!(
            err,
            Error::invalid_hook(
                "hover",
                "expected a ':' selector fragment, '@media <query>' or '@supports <condition>'"
            )
        );
    }

    #[test]
    fn check_reports_unknown_hooks() {
        let registry = HookRegistry::new([":hover"], debug_options()).unwrap();
        assert!(registry.check(":hover").is_ok());
        assert_eq!(registry.check(":active"), Err(Error::unknown_hook(":active")));
    }
}
