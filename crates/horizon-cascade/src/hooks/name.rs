//! Hook name validation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

static SELECTOR_HOOK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^::?[^\s:]\S*(?:\s.*)?$").expect("selector hook pattern"));

static AT_RULE_HOOK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(media|supports)\s+\S.*$").expect("at-rule hook pattern"));

/// The kind of condition a hook represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// A pseudo-class or pseudo-element fragment such as `:hover`.
    Selector,
    /// A media query such as `@media (min-width: 768px)`.
    Media,
    /// A feature query such as `@supports (display: grid)`.
    Supports,
}

/// A validated hook name.
///
/// ```
/// use horizon_cascade::hooks::{HookKind, HookName};
///
/// let hover: HookName = ":hover".parse().unwrap();
/// assert_eq!(hover.kind(), HookKind::Selector);
/// assert_eq!(hover.definition(), "&:hover");
///
/// let wide = HookName::parse("@media (min-width: 768px)").unwrap();
/// assert_eq!(wide.kind(), HookKind::Media);
/// assert_eq!(wide.definition(), "@media (min-width: 768px)");
///
/// assert!(HookName::parse("hover").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HookName {
    name: String,
    kind: HookKind,
}

impl HookName {
    /// Validate a hook name.
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let kind = if SELECTOR_HOOK.is_match(&name) {
            HookKind::Selector
        } else if let Some(captures) = AT_RULE_HOOK.captures(&name) {
            match &captures[1] {
                "media" => HookKind::Media,
                _ => HookKind::Supports,
            }
        } else {
            return Err(Error::invalid_hook(
                name,
                "expected a ':' selector fragment, '@media <query>' or '@supports <condition>'",
            ));
        };

        Ok(Self { name, kind })
    }

    /// The hook name as written.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The hook kind.
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    /// The definition handed to the hook system.
    ///
    /// Selector fragments are attached to the element (`&:hover`); at-rules
    /// are used verbatim.
    pub fn definition(&self) -> String {
        match self.kind {
            HookKind::Selector => format!("&{}", self.name),
            HookKind::Media | HookKind::Supports => self.name.clone(),
        }
    }
}

impl FromStr for HookName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for HookName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
