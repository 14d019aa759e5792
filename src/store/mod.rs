//! Store Module
//!
//! The storage engine that ties validation, codecs, the key index and the
//! filesystem together.
//!
//! ## Responsibilities
//! - Validate every key before any I/O
//! - Encode/decode values through the codec or user hooks
//! - Create the backing directory on first write
//! - Keep the key index in step with the files it has written/removed
//! - Optionally restore the index from an existing directory on open
//!
//! ## Concurrency Model
//!
//! All operations take `&self`; the key index sits behind a `RwLock` and is
//! only mutated *after* the matching filesystem call succeeds. Readers that
//! run while a write is in flight see the pre-write state. Nothing serializes
//! two callers racing on the same key: if ordering matters, sequence the
//! calls.

mod clear;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::codec::{Codec, Hooks, JsonCodec, RawCodec};
use crate::config::Config;
use crate::error::{IoSite, Result, StoreError};
use crate::index::KeyIndex;
use crate::key::{build_path, validate_key};

/// Raw mode store: string values, files without extension
pub type RawStore = Store<RawCodec>;

/// JSON mode store: serde values, `.json` files
pub type JsonStore<T> = Store<JsonCodec<T>>;

/// A persistent key-value store with one file per key
pub struct Store<C: Codec = RawCodec> {
    /// Store configuration (immutable after open)
    config: Config,

    /// Backing directory, one file per key
    directory: PathBuf,

    /// Known keys in first-write order
    keys: RwLock<KeyIndex>,

    /// Storage mode
    codec: C,

    /// Optional serialize/deserialize overrides
    hooks: Hooks<C::Value>,
}

impl<C: Codec + Default> Store<C> {
    /// Open a store with the mode's default codec and no hooks
    pub fn open(config: Config) -> Result<Self> {
        Self::with_hooks(config, C::default(), Hooks::new())
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified directory
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(Config::builder().directory(path).build())
    }
}

impl Store<RawCodec> {
    /// Write any displayable value in raw mode
    ///
    /// The value is stored as its `to_string()` form, which is exactly what
    /// `get_item` returns afterwards.
    pub fn set_display(&self, key: impl AsRef<[u8]>, value: impl fmt::Display) -> Result<()> {
        self.set_item(key, value.to_string())
    }
}

impl<C: Codec> Store<C> {
    /// Open a store with an explicit codec and hook pair
    ///
    /// On open:
    /// 1. Reject an empty directory path
    /// 2. If `restore` is set, list the directory and seed the key index
    ///    (the directory must already exist)
    pub fn with_hooks(config: Config, codec: C, hooks: Hooks<C::Value>) -> Result<Self> {
        if config.directory.as_os_str().is_empty() {
            return Err(StoreError::Config("Missing path argument".to_string()));
        }

        let directory = config.directory.clone();
        let keys = if config.restore {
            let keys = restore_keys(&directory, codec.extension())?;
            debug!(
                directory = %directory.display(),
                restored = keys.len(),
                "restored key index"
            );
            keys
        } else {
            KeyIndex::new()
        };

        Ok(Self {
            config,
            directory,
            keys: RwLock::new(keys),
            codec,
            hooks,
        })
    }

    // =========================================================================
    // Index Accessors
    // =========================================================================

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.keys.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.read().is_empty()
    }

    /// Key at position `index`, or `None` when out of bounds
    ///
    /// Positions follow first-write order and shift down after removals.
    pub fn key(&self, index: usize) -> Option<String> {
        self.keys.read().get(index).map(str::to_string)
    }

    /// Snapshot of every key in index order
    pub fn keys(&self) -> Vec<String> {
        self.keys.read().to_vec()
    }

    /// Whether `key` is indexed; invalid keys are never present
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.validate(key.as_ref())
            .map(|(_, at)| at.is_some())
            .unwrap_or(false)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Read the value stored under `key`
    ///
    /// Returns:
    /// - `Ok(Some(value))` — key indexed and file decoded
    /// - `Ok(None)` — key not indexed (a miss is not an error)
    pub fn get_item(&self, key: impl AsRef<[u8]>) -> Result<Option<C::Value>> {
        let (key, at) = self.validate(key.as_ref())?;
        if at.is_none() {
            return Ok(None);
        }

        let path = self.file_path(key);
        let text =
            fs::read_to_string(&path).map_err(|e| StoreError::io(IoSite::Read, &path, e))?;

        let value = self.hooks.decode(&self.codec, &text)?;
        debug!(key, "get item");
        Ok(Some(value))
    }

    /// Write `value` under `key`, overwriting any previous value
    ///
    /// Steps:
    /// 1. Validate the key
    /// 2. Encode the value (serialize hook or codec)
    /// 3. Ensure the directory exists
    /// 4. Write the file
    /// 5. Index the key if it is new
    pub fn set_item(&self, key: impl AsRef<[u8]>, value: impl Into<C::Value>) -> Result<()> {
        let (key, _) = self.validate(key.as_ref())?;

        let value = value.into();
        let text = self.hooks.encode(&self.codec, &value)?;

        self.ensure_directory()?;

        let path = self.file_path(key);
        fs::write(&path, text).map_err(|e| StoreError::io(IoSite::Write, &path, e))?;

        let inserted = self.keys.write().insert(key);
        debug!(key, inserted, "set item");
        Ok(())
    }

    /// Delete the value stored under `key`
    ///
    /// Removing a key that was never set is not an error and does no I/O.
    pub fn remove_item(&self, key: impl AsRef<[u8]>) -> Result<()> {
        let (key, at) = self.validate(key.as_ref())?;
        if at.is_none() {
            return Ok(());
        }

        let path = self.file_path(key);
        fs::remove_file(&path).map_err(|e| StoreError::io(IoSite::Remove, &path, e))?;

        // Position is looked up again: concurrent removals may have shifted it
        self.keys.write().remove(key);
        debug!(key, "removed item");
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The backing directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The configuration the store was opened with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// File extension of the storage mode
    pub fn extension(&self) -> &str {
        self.codec.extension()
    }

    /// On-disk path a valid key maps to
    pub fn path_for(&self, key: impl AsRef<[u8]>) -> Result<PathBuf> {
        let (key, _) = self.validate(key.as_ref())?;
        Ok(self.file_path(key))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Validate `key` and look up its current index position
    fn validate<'k>(&self, key: &'k [u8]) -> Result<(&'k str, Option<usize>)> {
        let keys = self.keys.read();
        let validation = validate_key(key, Some(&*keys));
        let at = validation.at_index;
        Ok((validation.into_result()?, at))
    }

    fn file_path(&self, key: &str) -> PathBuf {
        build_path(&self.directory, key, self.codec.extension())
    }

    /// Create the directory if it is missing
    ///
    /// A probe failure other than "not found" (e.g. permission denied) is
    /// reported as-is instead of attempting creation.
    fn ensure_directory(&self) -> Result<()> {
        match fs::metadata(&self.directory) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&self.directory)
                    .map_err(|e| StoreError::io(IoSite::CreateDirectory, &self.directory, e))?;
                debug!(directory = %self.directory.display(), "created store directory");
                Ok(())
            }
            Err(e) => Err(StoreError::io(IoSite::ProbeDirectory, &self.directory, e)),
        }
    }
}

/// Build a key index from the files in `directory`
///
/// One key per regular file whose name ends with `extension` (stripped).
/// Names are sorted so the restored order is deterministic.
fn restore_keys(directory: &Path, extension: &str) -> Result<KeyIndex> {
    let entries = fs::read_dir(directory).map_err(|e| StoreError::io(IoSite::List, directory, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::io(IoSite::List, directory, e))?;
        let file_path = entry.path();

        if !file_path.is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %file_path.display(), "skipping non UTF-8 file name during restore");
            continue;
        };

        if let Some(key) = name.strip_suffix(extension) {
            names.push(key.to_string());
        }
    }

    names.sort();
    Ok(names.into_iter().collect())
}
