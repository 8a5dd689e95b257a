use crate::config::{ConfigError, ConfigInstance};
use crate::TrieMap;
use serde::{Deserialize, Serialize};

/// Configuration format for [`TrieMap`](../struct.TrieMap.html)
/// containers.
///
/// The trie takes no constructor parameter, so the format is the `id`
/// field alone:
/// - `id = "TrieMapConfig"`
///
/// Unlike the comparison-keyed engines, the trie's key type is fixed to
/// byte strings, so this config builds a concrete [`TrieMap`] rather
/// than participating in the generic map dispatch.
///
/// ```
/// use sorted_collections::config::{ConfigInstance, TrieMapConfig};
///
/// let mut map = TrieMapConfig::from_string("id = 'TrieMapConfig'")
///     .unwrap()
///     .build::<u64>();
/// map.put("key", 1);
/// assert_eq!(map.count(), 1);
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct TrieMapConfig {
    #[allow(dead_code)]
    id: String,
}

impl ConfigInstance for TrieMapConfig {
    fn id() -> &'static str {
        "TrieMapConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(&value).unwrap();
        toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid TrieMapConfig: {}\n{:?}",
                toml, e
            ))
        })
    }
}

impl TrieMapConfig {
    /// Build the configured [`TrieMap`].
    pub fn build<V>(self) -> TrieMap<V> {
        TrieMap::new()
    }
}
