//! Codec Module
//!
//! Value <-> text conversion applied around every file read and write.
//!
//! ## Responsibilities
//! - Define the storage mode (value type + file extension)
//! - Raw mode: values are plain strings, files carry no extension
//! - JSON mode: values are serde types, files end in `.json`
//! - Optional user hooks that replace the codec on write and/or read
//!
//! ## Write / Read Path
//! ```text
//!   set_item(value)                     get_item()
//!        │                                  ▲
//!        ▼                                  │
//!   serialize hook? ──no──► codec.encode    deserialize hook? ──no──► codec.decode
//!        │                     │            ▲                           ▲
//!        └─────────┬───────────┘            └───────────┬───────────────┘
//!                  ▼                                    │
//!            file contents (UTF-8) ─────────────────────┘
//! ```

mod hooks;
mod json;

pub use hooks::Hooks;
pub use json::JsonCodec;

use crate::error::Result;

/// A storage mode: how values become file contents and back
pub trait Codec: Send + Sync {
    /// The value type callers store and read back
    type Value;

    /// File extension including the dot, or empty
    fn extension(&self) -> &str;

    /// Turn a value into file contents
    fn encode(&self, value: &Self::Value) -> Result<String>;

    /// Turn file contents back into a value
    fn decode(&self, text: &str) -> Result<Self::Value>;
}

/// Raw mode: values are stored verbatim as strings, without extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodec;

impl Codec for RawCodec {
    type Value = String;

    fn extension(&self) -> &str {
        ""
    }

    fn encode(&self, value: &String) -> Result<String> {
        Ok(value.clone())
    }

    fn decode(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
