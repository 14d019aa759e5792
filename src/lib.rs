//! # filekv
//!
//! A persistent key-value store with a `localStorage`-style contract:
//! - One file per key inside a single directory
//! - Ordered in-memory key index (`len()` / `key(i)`)
//! - Raw string mode or JSON mode (`.json` files, serde values)
//! - Optional serialize/deserialize hooks
//! - Optional restore of the key index from an existing directory
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Store<C>                             │
//! │     len · key · get_item · set_item · remove_item · clear    │
//! └──────┬──────────────┬───────────────┬───────────────┬───────┘
//!        │              │               │               │
//!        ▼              ▼               ▼               ▼
//!  ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌────────────┐
//!  │    Key    │  │ KeyIndex  │  │ Codec/Hooks │  │ Filesystem │
//!  │ validator │  │ (RwLock)  │  │ raw / json  │  │ {dir}/{key}│
//!  │ + path    │  │           │  │             │  │   {ext}    │
//!  └───────────┘  └───────────┘  └─────────────┘  └────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use filekv::{Config, RawStore};
//!
//! # fn main() -> filekv::Result<()> {
//! let store = RawStore::open(Config::builder().directory("./data").build())?;
//! store.set_item("foo", "bar")?;
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.get_item("foo")?, Some("bar".to_string()));
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod key;
pub mod index;
pub mod codec;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use codec::{Codec, Hooks, JsonCodec, RawCodec};
pub use config::Config;
pub use error::{BoxError, IoSite, Result, StoreError};
pub use index::KeyIndex;
pub use store::{JsonStore, RawStore, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
