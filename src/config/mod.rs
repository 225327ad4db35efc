//! Configuration loading and management

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::query::SortOrder;

fn default_page_size() -> i64 {
    20
}

/// Configuration for the search layer.
///
/// # Example (YAML)
/// ```yaml
/// default_order: "score:desc"
/// default_page_size: 25
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default sort expression applied when the caller specifies none
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    ///
    /// Fields: `insertion`, `name`, `score`. An unparseable expression
    /// falls back to insertion order.
    #[serde(default)]
    pub default_order: Option<String>,

    /// Page size used by convenience constructors when the caller
    /// does not pick one
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_order: None,
            default_page_size: default_page_size(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Parse the configured sort expression, falling back to insertion
    /// order when unset or unparseable
    pub fn order(&self) -> SortOrder {
        self.default_order
            .as_deref()
            .and_then(SortOrder::parse)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{Direction, SortKey};

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.order(), SortOrder::default());
    }

    #[test]
    fn test_from_yaml_str() {
        let config = SearchConfig::from_yaml_str(
            "default_order: \"score:desc\"\ndefault_page_size: 25\n",
        )
        .unwrap();

        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.order().key, SortKey::Score);
        assert_eq!(config.order().direction, Direction::Desc);
    }

    #[test]
    fn test_unparseable_order_falls_back() {
        let config = SearchConfig {
            default_order: Some("altitude:up".to_string()),
            ..Default::default()
        };
        assert_eq!(config.order(), SortOrder::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SearchConfig::from_yaml_str("{}").unwrap();
        assert!(config.default_order.is_none());
        assert_eq!(config.default_page_size, 20);
    }
}
