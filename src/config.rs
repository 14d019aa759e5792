//! Configuration for filekv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::thread;

/// Main configuration for a store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding one file per key.
    /// Layout:
    ///   {directory}/
    ///     ├── foo.json
    ///     └── bar.json
    pub directory: PathBuf,

    /// Seed the key index from the files already in `directory` on open.
    /// The directory must exist when this is set.
    pub restore: bool,

    // -------------------------------------------------------------------------
    // Concurrency Configuration
    // -------------------------------------------------------------------------
    /// Worker threads used by `clear()` to delete files in parallel
    pub clear_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./filekv_data"),
            restore: false,
            clear_workers: default_clear_workers(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

fn default_clear_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing directory
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.directory = path.into();
        self
    }

    /// Scan the directory for existing keys on open
    pub fn restore(mut self, restore: bool) -> Self {
        self.config.restore = restore;
        self
    }

    /// Set the number of `clear()` workers (at least one)
    pub fn clear_workers(mut self, count: usize) -> Self {
        self.config.clear_workers = count.max(1);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
