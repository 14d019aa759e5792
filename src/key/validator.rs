//! Key validation
//!
//! A key is valid when it is UTF-8 text without a path separator.
//! The empty string is accepted.

use std::path::MAIN_SEPARATOR;

use crate::error::{Result, StoreError};
use crate::index::KeyIndex;

/// Message reported for keys that are not UTF-8 text
pub const NOT_A_STRING: &str = "key must be a string";

/// Outcome of validating a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValidation<'a> {
    /// The key as text, when it decoded
    pub key: Option<&'a str>,

    /// Is the key well-formed?
    pub is_valid: bool,

    /// Why the key was rejected
    pub message: Option<String>,

    /// Whether the key is in the index (only set when an index was supplied)
    pub is_present: Option<bool>,

    /// Position in the index, `None` when absent or no index was supplied
    pub at_index: Option<usize>,
}

impl<'a> KeyValidation<'a> {
    fn rejected(key: Option<&'a str>, message: String) -> Self {
        Self {
            key,
            is_valid: false,
            message: Some(message),
            is_present: None,
            at_index: None,
        }
    }

    /// Convert into the validated key, or an `InvalidKey` error
    pub fn into_result(self) -> Result<&'a str> {
        match (self.is_valid, self.key) {
            (true, Some(key)) => Ok(key),
            _ => Err(StoreError::InvalidKey(
                self.message.unwrap_or_else(|| NOT_A_STRING.to_string()),
            )),
        }
    }

    /// True when validation succeeded and the index holds the key
    pub fn is_present(&self) -> bool {
        self.is_present.unwrap_or(false)
    }
}

/// Validate a raw key, optionally looking it up in `index`
///
/// The separator position in the error message counts characters, not bytes.
pub fn validate_key<'a>(key: &'a [u8], index: Option<&KeyIndex>) -> KeyValidation<'a> {
    let key = match std::str::from_utf8(key) {
        Ok(key) => key,
        Err(_) => return KeyValidation::rejected(None, NOT_A_STRING.to_string()),
    };

    if let Some(at) = key.chars().position(|c| c == MAIN_SEPARATOR) {
        return KeyValidation::rejected(
            Some(key),
            format!("key must not contain a separator. Found at index {}", at),
        );
    }

    let at_index = index.and_then(|index| index.position(key));

    KeyValidation {
        key: Some(key),
        is_valid: true,
        message: None,
        is_present: index.map(|_| at_index.is_some()),
        at_index,
    }
}
