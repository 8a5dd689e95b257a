//! Build containers from toml descriptions.
//!
//! Every container of the family has a configuration format: a toml
//! table whose `id` field names the format and whose remaining fields
//! carry the constructor parameters. A configuration can be decoded
//! from a string or a file into its config struct and then built into
//! the container it describes:
//!
//! ```
//! use sorted_collections::config::{BTreeMapConfig, ConfigInstance};
//! use sorted_collections::SortedMap;
//!
//! let config_str = "
//! id = 'BTreeMapConfig'
//! branching_factor = 8
//! ";
//! let mut map = BTreeMapConfig::from_string(config_str)
//!     .unwrap()
//!     .build::<u64, u64>();
//! map.put(1, 1);
//! ```
//!
//! When the concrete engine is itself part of the configuration, the
//! generic configurations dispatch on the `id` field and build a boxed
//! trait object instead:
//!
//! ```
//! use sorted_collections::config::{DynSortedMap, GenericMapConfig};
//! use sorted_collections::SortedMap;
//!
//! let mut map: DynSortedMap<u64, u64> =
//!     GenericMapConfig::from_string("id = 'SkipListMapConfig'\nmax_level = 8")
//!         .unwrap()
//!         .build()
//!         .unwrap();
//! map.put(1, 1);
//! assert_eq!(map.count(), 1);
//! ```
//!
//! The trie is the one exception to the generic dispatch: its key type
//! is fixed to byte strings, so
//! [`TrieMapConfig`](struct.TrieMapConfig.html) only builds the
//! concrete [`TrieMap`](../struct.TrieMap.html).

use crate::{SortedMap, SortedSet};
use std::path::Path;

mod error;
pub use error::ConfigError;

pub use crate::array_set::config::ArraySetConfig;
pub use crate::btree::config::BTreeMapConfig;
pub use crate::rbtree::config::RedBlackTreeSetConfig;
pub use crate::skiplist::config::SkipListMapConfig;
pub use crate::treap::config::TreapMapConfig;
pub use crate::trie::config::TrieMapConfig;

/// A map engine chosen at run time by a
/// [`GenericMapConfig`](struct.GenericMapConfig.html).
pub type DynSortedMap<K, V> = Box<dyn SortedMap<K, V>>;

/// A set engine chosen at run time by a
/// [`GenericSetConfig`](struct.GenericSetConfig.html).
pub type DynSortedSet<T> = Box<dyn SortedSet<T>>;

/// The decoding interface every container configuration implements.
///
/// A configuration is identified by the string its
/// [`id()`](ConfigInstance::id) method returns; decoding from a string
/// or a file checks the input's `id` field against it before handing
/// the table to [`from_toml()`](ConfigInstance::from_toml).
pub trait ConfigInstance: Sized {
    /// The value of the `id` field naming this configuration format.
    fn id() -> &'static str;

    /// Decode this configuration from an already parsed toml table,
    /// validating field types and parameter ranges.
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError>;

    /// Decode this configuration from a toml string.
    fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value =
            toml::from_str(s).map_err(ConfigError::TomlFormatError)?;
        match config_id(&value)? {
            id if id == Self::id() => Self::from_toml(&value),
            id => Err(ConfigError::ConfigFormatError(format!(
                "Expected id '{}', got '{}'",
                Self::id(),
                id
            ))),
        }
    }

    /// Decode this configuration from a toml file.
    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(ConfigError::IOError)?;
        Self::from_string(&s)
    }
}

fn config_id(value: &toml::Value) -> Result<&str, ConfigError> {
    value
        .get("id")
        .and_then(|id| id.as_str())
        .ok_or_else(|| {
            ConfigError::ConfigFormatError(
                "Missing 'id' string field".to_string(),
            )
        })
}

/// Configuration dispatching between the comparison-keyed map engines.
///
/// The table is matched on its `id` field against
/// [`BTreeMapConfig`](struct.BTreeMapConfig.html),
/// [`SkipListMapConfig`](struct.SkipListMapConfig.html) and
/// [`TreapMapConfig`](struct.TreapMapConfig.html), and
/// [`build()`](GenericMapConfig::build) returns the chosen engine
/// behind a [`DynSortedMap`](type.DynSortedMap.html).
pub struct GenericMapConfig {
    value: toml::Value,
}

impl GenericMapConfig {
    /// Parse a generic map configuration from a toml string.
    pub fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value =
            toml::from_str(s).map_err(ConfigError::TomlFormatError)?;
        config_id(&value)?;
        Ok(GenericMapConfig { value })
    }

    /// Parse a generic map configuration from a toml file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(ConfigError::IOError)?;
        Self::from_string(&s)
    }

    /// Build the configured map engine.
    pub fn build<K, V>(self) -> Result<DynSortedMap<K, V>, ConfigError>
    where
        K: Ord + 'static,
        V: 'static,
    {
        match config_id(&self.value)? {
            id if id == BTreeMapConfig::id() => {
                Ok(Box::new(BTreeMapConfig::from_toml(&self.value)?.build()))
            }
            id if id == SkipListMapConfig::id() => {
                Ok(Box::new(SkipListMapConfig::from_toml(&self.value)?.build()))
            }
            id if id == TreapMapConfig::id() => {
                Ok(Box::new(TreapMapConfig::from_toml(&self.value)?.build()))
            }
            id => Err(ConfigError::ConfigFormatError(format!(
                "Unknown map container id '{}'",
                id
            ))),
        }
    }
}

/// Configuration dispatching between the set engines.
///
/// The table is matched on its `id` field against
/// [`RedBlackTreeSetConfig`](struct.RedBlackTreeSetConfig.html) and
/// [`ArraySetConfig`](struct.ArraySetConfig.html), and
/// [`build()`](GenericSetConfig::build) returns the chosen engine
/// behind a [`DynSortedSet`](type.DynSortedSet.html).
pub struct GenericSetConfig {
    value: toml::Value,
}

impl GenericSetConfig {
    /// Parse a generic set configuration from a toml string.
    pub fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value =
            toml::from_str(s).map_err(ConfigError::TomlFormatError)?;
        config_id(&value)?;
        Ok(GenericSetConfig { value })
    }

    /// Parse a generic set configuration from a toml file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(ConfigError::IOError)?;
        Self::from_string(&s)
    }

    /// Build the configured set engine.
    pub fn build<T>(self) -> Result<DynSortedSet<T>, ConfigError>
    where
        T: Ord + 'static,
    {
        match config_id(&self.value)? {
            id if id == RedBlackTreeSetConfig::id() => Ok(Box::new(
                RedBlackTreeSetConfig::from_toml(&self.value)?.build(),
            )),
            id if id == ArraySetConfig::id() => {
                Ok(Box::new(ArraySetConfig::from_toml(&self.value)?.build()))
            }
            id => Err(ConfigError::ConfigFormatError(format!(
                "Unknown set container id '{}'",
                id
            ))),
        }
    }
}
