use crate::config::{ConfigError, ConfigInstance};
use crate::TreapMap;
use serde::{Deserialize, Serialize};

/// Configuration format for [`TreapMap`](../struct.TreapMap.html)
/// containers.
///
/// This configuration format is composed of one mandatory field and one
/// optional field:
/// - `id = "TreapMapConfig"` and
/// - `seed = <int>` (optional), seeding the priority generator for a
///   reproducible tree shape.
///
/// ```
/// use sorted_collections::config::{ConfigInstance, TreapMapConfig};
/// use sorted_collections::SortedMap;
///
/// let config_str = "
/// id = 'TreapMapConfig'
/// seed = 42
/// ";
/// let mut map = TreapMapConfig::from_string(config_str)
///     .unwrap()
///     .build::<u64, u64>();
/// map.put(1, 1);
/// assert_eq!(map.count(), 1);
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct TreapMapConfig {
    #[allow(dead_code)]
    id: String,
    seed: Option<u64>,
}

impl ConfigInstance for TreapMapConfig {
    fn id() -> &'static str {
        "TreapMapConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(&value).unwrap();
        toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid TreapMapConfig: {}\n{:?}",
                toml, e
            ))
        })
    }
}

impl TreapMapConfig {
    /// Build the configured [`TreapMap`].
    pub fn build<K: Ord, V>(self) -> TreapMap<K, V> {
        let map = TreapMap::new();
        match self.seed {
            Some(seed) => map.with_seed(seed),
            None => map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TreapMapConfig;
    use crate::config::{ConfigError, ConfigInstance};
    use crate::SortedMap;

    #[test]
    fn valid_treap_map_config() {
        let config_str = "id='TreapMapConfig'\nseed=42";
        let config = TreapMapConfig::from_string(config_str).unwrap();
        let mut map = config.build::<u64, u64>();
        map.put(1, 1);
        assert_eq!(map.count(), 1);
    }

    #[test]
    fn seed_is_optional() {
        let config = TreapMapConfig::from_string("id='TreapMapConfig'").unwrap();
        let map = config.build::<u64, u64>();
        assert!(map.is_empty());
    }

    #[test]
    fn invalid_treap_map_config() {
        let config_str = "id='TreapMapConfig'\nseed='yes'";
        assert!(matches!(
            TreapMapConfig::from_string(config_str),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }
}
