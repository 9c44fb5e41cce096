//! Keyframe animations.

use std::collections::HashMap;

use horizon_cascade_hooks::{Value, hyphenate, stringify};
use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::{Error, Result};

/// An ordered list of keyframe offsets and their properties.
///
/// ```
/// use horizon_cascade::Keyframes;
///
/// let fade_in = Keyframes::new()
///     .frame("0%", [("opacity", 0)])
///     .frame("100%", [("opacity", 1)]);
/// assert_eq!(fade_in.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyframes {
    frames: Vec<(String, IndexMap<String, Value>)>,
}

impl Keyframes {
    /// Create an empty animation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame at `offset` (`"0%"`, `"from"`, ...).
    pub fn frame<K, V>(mut self, offset: impl Into<String>, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let properties = properties
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.frames.push((offset.into(), properties));
        self
    }

    /// Iterate over frames in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexMap<String, Value>)> {
        self.frames.iter().map(|(offset, props)| (offset.as_str(), props))
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[derive(Debug, Default)]
struct KeyframeState {
    next_id: u64,
    blocks: HashMap<String, String>,
}

/// Issues keyframes names and stores their rendered `@keyframes` blocks.
///
/// Names follow call order, so registering identical frames twice yields
/// two names.
#[derive(Debug)]
pub struct KeyframeRegistry {
    prefix: String,
    debug: bool,
    state: Mutex<KeyframeState>,
}

impl KeyframeRegistry {
    /// Create a registry.
    pub fn new(prefix: impl Into<String>, debug: bool) -> Self {
        Self {
            prefix: prefix.into(),
            debug,
            state: Mutex::new(KeyframeState::default()),
        }
    }

    /// Register an animation and return its name.
    pub fn keyframes(&self, keyframes: &Keyframes) -> String {
        let mut state = self.state.lock();
        let name = format!("__{}_keyframes-{}", self.prefix, state.next_id);
        state.next_id += 1;

        let block = self.render(&name, keyframes);
        state.blocks.insert(name.clone(), block);

        tracing::debug!("Registered keyframes '{}' ({} frames)", name, keyframes.len());
        name
    }

    /// Concatenate the blocks for `names`, in the order given.
    pub fn style_sheet<S: AsRef<str>>(&self, names: &[S]) -> Result<String> {
        let state = self.state.lock();
        let blocks = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                state
                    .blocks
                    .get(name)
                    .map(|block| block.as_str())
                    .ok_or_else(|| Error::UnknownKeyframes {
                        name: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(blocks.join(if self.debug { "\n" } else { "" }))
    }

    /// Number of registered animations.
    pub fn len(&self) -> usize {
        self.state.lock().blocks.len()
    }

    /// Check if nothing was registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn render(&self, name: &str, keyframes: &Keyframes) -> String {
        let (space, newline) = if self.debug { (" ", "\n") } else { ("", "") };
        let indent = format!("{space}{space}");

        let mut lines = vec![format!("@keyframes {name}{space}{{")];
        for (offset, properties) in keyframes.iter() {
            lines.push(format!("{indent}{offset}{space}{{"));
            for (property, value) in properties {
                lines.push(format!(
                    "{indent}{indent}{}:{space}{};",
                    hyphenate(property),
                    stringify(property, value)
                ));
            }
            lines.push(format!("{indent}}}"));
        }
        lines.push("}".to_string());

        lines.join(newline)
    }
}
