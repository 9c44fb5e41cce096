//! Boolean conditions over hooks.

use std::fmt;

/// A condition under which a declaration applies.
///
/// Leaves name a hook; compound conditions combine other conditions and
/// are compiled into helper custom properties.
///
/// # Example
///
/// ```
/// use horizon_cascade_hooks::Condition;
///
/// let cond = Condition::and([Condition::hook(":hover"), Condition::hook(":focus")]);
/// assert_eq!(cond.to_string(), "and(:hover, :focus)");
/// assert_eq!(cond.hooks(), vec![":hover", ":focus"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// A single registered hook.
    Hook(String),
    /// All conditions hold.
    And(Vec<Condition>),
    /// At least one condition holds.
    Or(Vec<Condition>),
    /// The condition does not hold.
    Not(Box<Condition>),
}

impl Condition {
    /// Create a hook condition.
    pub fn hook(name: impl Into<String>) -> Self {
        Self::Hook(name.into())
    }

    /// Create a conjunction.
    pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::And(conditions.into_iter().collect())
    }

    /// Create a disjunction.
    pub fn or(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Or(conditions.into_iter().collect())
    }

    /// Create a negation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(condition: Condition) -> Self {
        Self::Not(Box::new(condition))
    }

    /// All hook names referenced by this condition, in order of appearance.
    pub fn hooks(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_hooks(&mut names);
        names
    }

    fn collect_hooks<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Condition::Hook(name) => names.push(name),
            Condition::And(items) | Condition::Or(items) => {
                for item in items {
                    item.collect_hooks(names);
                }
            }
            Condition::Not(inner) => inner.collect_hooks(names),
        }
    }
}

impl From<&str> for Condition {
    fn from(name: &str) -> Self {
        Self::hook(name)
    }
}

impl From<String> for Condition {
    fn from(name: String) -> Self {
        Self::Hook(name)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, items) = match self {
            Condition::Hook(name) => return f.write_str(name),
            Condition::Not(inner) => return write!(f, "not({})", inner),
            Condition::And(items) => ("and", items),
            Condition::Or(items) => ("or", items),
        };

        write!(f, "{}(", op)?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(")")
    }
}
