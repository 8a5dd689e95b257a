use crate::config::{ConfigError, ConfigInstance};
use crate::BTreeMap;
use serde::{Deserialize, Serialize};

/// Configuration format for [`BTreeMap`](../struct.BTreeMap.html)
/// containers.
///
/// This configuration format is composed of two key/value fields that
/// must be present:
/// - `id = "BTreeMapConfig"` and
/// - `branching_factor = <int>`, the maximum number of children per
///   node, at least 3.
///
/// ```
/// use sorted_collections::config::{ConfigInstance, BTreeMapConfig};
/// use sorted_collections::SortedMap;
///
/// let config_str = "
/// id = 'BTreeMapConfig'
/// branching_factor = 8
/// ";
/// let mut map = BTreeMapConfig::from_string(config_str)
///     .unwrap()
///     .build::<u64, u64>();
/// map.put(1, 1);
/// assert_eq!(map.count(), 1);
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct BTreeMapConfig {
    #[allow(dead_code)]
    id: String,
    branching_factor: usize,
}

impl ConfigInstance for BTreeMapConfig {
    fn id() -> &'static str {
        "BTreeMapConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(&value).unwrap();
        let config: BTreeMapConfig = toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid BTreeMapConfig: {}\n{:?}",
                toml, e
            ))
        })?;
        // Constructor preconditions become recoverable errors here:
        // a configuration file is user input, not programmer input.
        if config.branching_factor < 3 {
            return Err(ConfigError::ConfigFormatError(format!(
                "Invalid BTreeMapConfig: branching_factor must be at least 3, got {}",
                config.branching_factor
            )));
        }
        Ok(config)
    }
}

impl BTreeMapConfig {
    /// Build the configured [`BTreeMap`].
    pub fn build<K: Ord, V>(self) -> BTreeMap<K, V> {
        BTreeMap::with_branching_factor(self.branching_factor)
    }
}
