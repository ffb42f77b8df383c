//! Configuration entries returned by the config lane.

use serde::{Deserialize, Serialize};

/// Where a configuration value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    DynamicTopicConfig,
    DynamicBrokerConfig,
    DynamicDefaultBrokerConfig,
    StaticBrokerConfig,
    DefaultConfig,
    Unknown,
}

/// A single entry of an entity's configuration.
///
/// In a describe response every descriptive field is populated; as input to
/// an alter operation only `value` is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ConfigSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub config_type: Option<String>,
}

impl ConfigEntry {
    /// An alter-input entry carrying only the desired value.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            source: None,
            sensitive: None,
            read_only: None,
            config_type: None,
        }
    }
}
