//! Key Module
//!
//! Pure helpers for turning caller-supplied keys into file paths.
//!
//! ## Responsibilities
//! - Reject keys that are not UTF-8 text
//! - Reject keys containing the platform path separator
//! - Report whether (and where) a key sits in the key index
//! - Build the on-disk path `{directory}/{key}{extension}`
//!
//! Nothing here touches the filesystem.

mod path;
mod validator;

pub use path::build_path;
pub use validator::{validate_key, KeyValidation, NOT_A_STRING};
