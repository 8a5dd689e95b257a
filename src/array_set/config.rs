use crate::config::{ConfigError, ConfigInstance};
use crate::ArraySet;
use serde::{Deserialize, Serialize};

/// Configuration format for [`ArraySet`](../struct.ArraySet.html)
/// containers.
///
/// This configuration format is composed of one mandatory field and one
/// optional field:
/// - `id = "ArraySetConfig"` and
/// - `capacity = <int>` (optional), the number of values the backing
///   vector reserves up front.
///
/// ```
/// use sorted_collections::config::{ConfigInstance, ArraySetConfig};
/// use sorted_collections::SortedSet;
///
/// let config_str = "
/// id = 'ArraySetConfig'
/// capacity = 10
/// ";
/// let mut set = ArraySetConfig::from_string(config_str)
///     .unwrap()
///     .build::<u64>();
/// assert!(set.put(1));
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct ArraySetConfig {
    #[allow(dead_code)]
    id: String,
    capacity: Option<usize>,
}

impl ConfigInstance for ArraySetConfig {
    fn id() -> &'static str {
        "ArraySetConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(&value).unwrap();
        toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid ArraySetConfig: {}\n{:?}",
                toml, e
            ))
        })
    }
}

impl ArraySetConfig {
    /// Build the configured [`ArraySet`].
    pub fn build<T: Ord>(self) -> ArraySet<T> {
        match self.capacity {
            Some(n) => ArraySet::with_capacity(n),
            None => ArraySet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArraySetConfig;
    use crate::config::{ConfigError, ConfigInstance};
    use crate::SortedSet;

    #[test]
    fn valid_array_set_config() {
        let config_str = "id='ArraySetConfig'\ncapacity=16";
        let config = ArraySetConfig::from_string(config_str).unwrap();
        let mut set = config.build::<u64>();
        assert!(set.put(1));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn capacity_is_optional() {
        let config = ArraySetConfig::from_string("id='ArraySetConfig'").unwrap();
        let set = config.build::<u64>();
        assert!(set.is_empty());
    }

    #[test]
    fn invalid_array_set_config() {
        let config_str = "id='ArraySetConfig'\ncapacity='ten'";
        assert!(matches!(
            ArraySetConfig::from_string(config_str),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }
}
