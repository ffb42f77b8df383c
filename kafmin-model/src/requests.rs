//! Request shapes for the pass-through mutation operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Input to topic creation.
///
/// Either `replicas_assignments` is given explicitly, or the broker assigns
/// replicas from `num_partitions` and `replication_factor` (both optional,
/// falling back to broker defaults).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTopic {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_partitions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas_assignments: Option<BTreeMap<i32, Vec<i32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<BTreeMap<String, String>>,
}

impl NewTopic {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_partitions: None,
            replication_factor: None,
            replicas_assignments: None,
            configs: None,
        }
    }
}

/// Input to a partition-count increase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPartitions {
    pub total_count: i32,
    /// Replica assignments for the partitions being added, one inner list
    /// per new partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_assignments: Option<Vec<Vec<i32>>>,
}
