//! Error types for the style engine.

/// Result type alias for style engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or using a style engine.
///
/// Every error is local to the call that produced it; the engine stays
/// usable afterwards and no partially built style is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A conditional value references a hook the engine was not configured with.
    #[error("Hook '{hook}' is not configured. Add it to the hooks passed to the engine configuration")]
    UnknownHook { hook: String },

    /// A configured hook name has an unsupported shape.
    #[error("Invalid hook '{hook}': {message}")]
    InvalidHook { hook: String, message: String },

    /// A keyframes name was never issued by this engine.
    #[error("Unknown keyframes '{name}'")]
    UnknownKeyframes { name: String },

    /// A theme overrides a key its variable group does not define.
    #[error("Variable '{key}' is not defined in the variable group")]
    UnknownVariable { key: String },

    /// A variable expression was not issued by this engine.
    #[error("Variable '{expression}' was not defined by this engine")]
    ForeignVariable { expression: String },

    /// A property value has an unsupported shape.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// A dynamic style was applied with the wrong number of arguments.
    #[error("Dynamic style expects {expected} argument(s), got {actual}")]
    ArityMismatch { expected: usize, actual: usize },

    /// Invalid engine configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Error from the hook compiler.
    #[error(transparent)]
    Cascade(#[from] horizon_cascade_hooks::Error),
}

impl Error {
    /// Create an unknown hook error.
    pub fn unknown_hook(hook: impl Into<String>) -> Self {
        Self::UnknownHook { hook: hook.into() }
    }

    /// Create an invalid hook error.
    pub fn invalid_hook(hook: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHook {
            hook: hook.into(),
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_hook_message_names_the_hook() {
        let message = Error::unknown_hook(":active").to_string();
        assert!(message.contains("':active'"));
        assert!(message.contains("Add it to the hooks"));
    }

    #[test]
    fn cascade_errors_convert() {
        let err: Error = horizon_cascade_hooks::Error::unknown_hook(":x").into();
        assert!(matches!(err, Error::Cascade(_)));
    }
}
