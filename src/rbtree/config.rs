use crate::config::{ConfigError, ConfigInstance};
use crate::RedBlackTreeSet;
use serde::{Deserialize, Serialize};

/// Configuration format for
/// [`RedBlackTreeSet`](../struct.RedBlackTreeSet.html) containers.
///
/// The tree takes no constructor parameter, so the format is the `id`
/// field alone:
/// - `id = "RedBlackTreeSetConfig"`
///
/// ```
/// use sorted_collections::config::{ConfigInstance, RedBlackTreeSetConfig};
/// use sorted_collections::SortedSet;
///
/// let mut set = RedBlackTreeSetConfig::from_string("id = 'RedBlackTreeSetConfig'")
///     .unwrap()
///     .build::<u64>();
/// assert!(set.put(1));
/// ```
#[derive(Deserialize, Serialize, Clone)]
pub struct RedBlackTreeSetConfig {
    #[allow(dead_code)]
    id: String,
}

impl ConfigInstance for RedBlackTreeSetConfig {
    fn id() -> &'static str {
        "RedBlackTreeSetConfig"
    }

    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
        let toml = toml::to_string(&value).unwrap();
        toml::from_str(&toml).map_err(|e| {
            ConfigError::ConfigFormatError(format!(
                "Invalid RedBlackTreeSetConfig: {}\n{:?}",
                toml, e
            ))
        })
    }
}

impl RedBlackTreeSetConfig {
    /// Build the configured [`RedBlackTreeSet`].
    pub fn build<T: Ord>(self) -> RedBlackTreeSet<T> {
        RedBlackTreeSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTreeSetConfig;
    use crate::config::{ConfigError, ConfigInstance};
    use crate::SortedSet;

    #[test]
    fn valid_red_black_tree_set_config() {
        let config =
            RedBlackTreeSetConfig::from_string("id='RedBlackTreeSetConfig'")
                .unwrap();
        let mut set = config.build::<u64>();
        assert!(set.put(1));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn mismatched_id() {
        assert!(matches!(
            RedBlackTreeSetConfig::from_string("id='ArraySetConfig'"),
            Err(ConfigError::ConfigFormatError(_))
        ));
    }
}
