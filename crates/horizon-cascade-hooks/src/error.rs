//! Error types for hook compilation.

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while compiling declarations against a hook system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A condition references a hook the system was not created with.
    #[error("Hook '{hook}' is not defined in this hook system")]
    UnknownHook { hook: String },

    /// A compound condition has no operands.
    #[error("Empty '{operator}' condition")]
    EmptyCondition { operator: &'static str },
}

impl Error {
    /// Create an unknown hook error.
    pub fn unknown_hook(hook: impl Into<String>) -> Self {
        Self::UnknownHook { hook: hook.into() }
    }
}
