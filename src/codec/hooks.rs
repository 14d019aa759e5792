//! User-supplied serialize / deserialize hooks
//!
//! Each hook is optional. A configured hook fully replaces the codec for
//! its direction; whatever it returns is written (or handed back) verbatim.

use std::fmt;

use super::Codec;
use crate::error::{BoxError, Result, StoreError};

/// Transform applied to a value before it is written
type SerializeHook<V> = Box<dyn Fn(&V) -> std::result::Result<String, BoxError> + Send + Sync>;

/// Transform applied to file contents after they are read
type DeserializeHook<V> = Box<dyn Fn(&str) -> std::result::Result<V, BoxError> + Send + Sync>;

/// Optional hook pair for a store whose values are `V`
pub struct Hooks<V> {
    serialize: Option<SerializeHook<V>>,
    deserialize: Option<DeserializeHook<V>>,
}

impl<V> Default for Hooks<V> {
    fn default() -> Self {
        Self {
            serialize: None,
            deserialize: None,
        }
    }
}

impl<V> fmt::Debug for Hooks<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("serialize", &self.serialize.is_some())
            .field("deserialize", &self.deserialize.is_some())
            .finish()
    }
}

impl<V> Hooks<V> {
    /// No hooks: the codec handles both directions
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the write-side transform
    pub fn serialize<F>(mut self, hook: F) -> Self
    where
        F: Fn(&V) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
    {
        self.serialize = Some(Box::new(hook));
        self
    }

    /// Set the read-side transform
    pub fn deserialize<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<V, BoxError> + Send + Sync + 'static,
    {
        self.deserialize = Some(Box::new(hook));
        self
    }

    pub fn has_serialize(&self) -> bool {
        self.serialize.is_some()
    }

    pub fn has_deserialize(&self) -> bool {
        self.deserialize.is_some()
    }

    /// Produce file contents for `value`, preferring the serialize hook
    pub fn encode<C>(&self, codec: &C, value: &V) -> Result<String>
    where
        C: Codec<Value = V>,
    {
        match &self.serialize {
            Some(hook) => hook(value).map_err(StoreError::SerializeHook),
            None => codec.encode(value),
        }
    }

    /// Produce a value from file contents, preferring the deserialize hook
    pub fn decode<C>(&self, codec: &C, text: &str) -> Result<V>
    where
        C: Codec<Value = V>,
    {
        match &self.deserialize {
            Some(hook) => hook(text).map_err(StoreError::DeserializeHook),
            None => codec.decode(text),
        }
    }
}
