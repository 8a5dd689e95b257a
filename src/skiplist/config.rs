use crate::config::{ConfigError, ConfigInstance};
use crate::skiplist::skiplist::MAX_LEVEL_LIMIT;
use crate::SkipListMap;
use serde::{Deserialize, Serialize};

/// Configuration format for [`SkipListMap`](../struct.SkipListMap.html)
/// containers.
///
/// This configuration format is composed of two mandatory fields and one
/// optional field:
/// - `id = "SkipListMapConfig"`,
/// - `max_level = <int>` in `[1, 32]`, and
/// - `seed = <int>` (optional), seeding the level generator for a
///   reproducible structure.
///
/// ```
/// use sorted_collections::config::{ConfigInstance, SkipListMapConfig};
/// use sorted_collections::SortedMap;
///
/// let config_str = "
/// id = 'SkipListMapConfig'
/// max_level = 16
/// seed = 42
/// ";
/// let mut map = SkipListMapConfig::from_string(config_str)
///     .unwrap()
///     .build::<u64, u64>();
/// map.put(1, 1);
/// assert_eq!(map.count(), 1);
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct SkipListMapConfig {
    #[allow(dead_code)]
    id: String,
    max_level: usize,
    seed: Option<u64>,
}

impl ConfigInstance for SkipListMapConfig {
    fn id() -> &'static str {
        "SkipListMapConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(&value).unwrap();
        let config: SkipListMapConfig =
            toml::from_str(&toml).map_err(|e| {
                ConfigError::ConfigFormatError(format!(
                    "Invalid SkipListMapConfig: {}\n{:?}",
                    toml, e
                ))
            })?;
        if !(1..=MAX_LEVEL_LIMIT).contains(&config.max_level) {
            return Err(ConfigError::ConfigFormatError(format!(
                "Invalid SkipListMapConfig: max_level must be in [1, {}], got {}",
                MAX_LEVEL_LIMIT, config.max_level
            )));
        }
        Ok(config)
    }
}

impl SkipListMapConfig {
    /// Build the configured [`SkipListMap`].
    pub fn build<K: Ord, V>(self) -> SkipListMap<K, V> {
        let map = SkipListMap::with_max_level(self.max_level);
        match self.seed {
            Some(seed) => map.with_seed(seed),
            None => map,
        }
    }
}
