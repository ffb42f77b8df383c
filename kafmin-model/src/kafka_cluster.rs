//! Cluster entity as surfaced by the console.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cursor::{self, CursorError};

/// Sort-field names accepted by cluster listings.
pub mod fields {
    pub const NAME: &str = "name";
    pub const NAMESPACE: &str = "namespace";
    pub const CREATION_TIMESTAMP: &str = "creationTimestamp";

    /// Fields projected into a cluster cursor.
    pub const CURSOR: &[&str] = &[NAME, NAMESPACE, CREATION_TIMESTAMP];
}

/// A broker or controller node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: i32,
    pub host: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Option<String>,
}

/// An advertised listener of the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KafkaListener {
    #[serde(rename = "type")]
    pub listener_type: String,
    pub bootstrap_servers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
}

/// One entry of the cluster's condition set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

/// A managed cluster record.
///
/// `name`, `namespace`, and `creation_timestamp` come from the management
/// layer and are absent on clusters known only through the admin protocol;
/// the remaining sections come from a describe operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KafkaCluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    pub nodes: Vec<Node>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<Node>,
    pub authorized_operations: Vec<String>,
    pub listeners: Vec<KafkaListener>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub conditions: Vec<Condition>,
}

impl KafkaCluster {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Encode this cluster's pagination cursor: identity plus the attributes
    /// named in `sort_fields`.
    pub fn to_cursor(&self, sort_fields: &[String]) -> String {
        let mut attributes = Map::new();
        cursor::maybe_attribute(
            &mut attributes,
            sort_fields,
            fields::NAME,
            self.name.clone().map(Value::String),
        );
        cursor::maybe_attribute(
            &mut attributes,
            sort_fields,
            fields::NAMESPACE,
            self.namespace.clone().map(Value::String),
        );
        cursor::maybe_attribute(
            &mut attributes,
            sort_fields,
            fields::CREATION_TIMESTAMP,
            self.creation_timestamp.clone().map(Value::String),
        );
        cursor::encode(self.id.as_deref().unwrap_or(""), attributes)
    }

    /// Rebuild the skeleton cluster a cursor was derived from, carrying only
    /// identity and the projected attributes.
    pub fn from_cursor(token: &str) -> Result<Self, CursorError> {
        let (id, attributes) = cursor::decode(token)?;
        let get = |key: &str| {
            attributes
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };

        Ok(Self {
            id: (!id.is_empty()).then_some(id),
            name: get(fields::NAME),
            namespace: get(fields::NAMESPACE),
            creation_timestamp: get(fields::CREATION_TIMESTAMP),
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_projects_only_requested_attributes() {
        let cluster = KafkaCluster {
            id: Some("cluster-1".into()),
            name: Some("prod".into()),
            namespace: Some("kafka".into()),
            creation_timestamp: Some("2024-03-01T09:00:00Z".into()),
            ..KafkaCluster::default()
        };

        let token = cluster.to_cursor(&["name".into(), "namespace".into()]);
        let skeleton = KafkaCluster::from_cursor(&token).unwrap();

        assert_eq!(skeleton.id.as_deref(), Some("cluster-1"));
        assert_eq!(skeleton.name.as_deref(), Some("prod"));
        assert_eq!(skeleton.namespace.as_deref(), Some("kafka"));
        assert_eq!(skeleton.creation_timestamp, None);
        assert!(skeleton.nodes.is_empty());
    }

    #[test]
    fn cursor_records_unset_projected_attributes_as_null() {
        let cluster = KafkaCluster::new("cluster-2");
        let token = cluster.to_cursor(&["namespace".into()]);

        let skeleton = KafkaCluster::from_cursor(&token).unwrap();
        assert_eq!(skeleton.namespace, None);
    }
}
