//! The cluster-management capability consumed by the console services.
//!
//! The wire protocol is owned by the implementation behind [`AdminClient`];
//! this module only fixes the operation contracts and the wire-adjacent data
//! shapes. The split between per-key and batch results mirrors the protocol:
//! describe and offset lookups resolve one future per key, while config
//! lookups settle as a single batched mapping.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use kafmin_model::{ConfigEntry, Either, Fault, NewPartitions, NewTopic, OffsetInfo, PartitionInfo, Topic};
use uuid::Uuid;

/// One independently resolvable remote outcome. An `Err` here is a per-key
/// fault; submission-level faults are returned by the issuing method itself.
pub type AdminFuture<T> = BoxFuture<'static, std::result::Result<T, Fault>>;

/// Key of one partition in an offset lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicPartition {
    pub topic: String,
    pub partition: i32,
}

impl TopicPartition {
    pub fn new(topic: impl Into<String>, partition: i32) -> Self {
        Self {
            topic: topic.into(),
            partition,
        }
    }
}

/// Which offset to resolve for each requested partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetQuery {
    Earliest,
    Latest,
    MaxTimestamp,
    /// The earliest offset whose record timestamp is at or after the instant.
    ForTimestamp(DateTime<Utc>),
}

impl FromStr for OffsetQuery {
    type Err = Fault;

    /// The three named specs are matched case-sensitively; anything else
    /// must parse as an ISO-8601 instant or the whole request is rejected
    /// (a submission-level fault, never a per-partition one).
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        match spec {
            "earliest" => Ok(OffsetQuery::Earliest),
            "latest" => Ok(OffsetQuery::Latest),
            "maxTimestamp" => Ok(OffsetQuery::MaxTimestamp),
            other => DateTime::parse_from_rfc3339(other)
                .map(|instant| OffsetQuery::ForTimestamp(instant.with_timezone(&Utc)))
                .map_err(|_| Fault::InvalidOffsetSpec(other.to_owned())),
        }
    }
}

/// Type of a configuration resource key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceType {
    Topic,
    Broker,
}

/// Key of one resource in a config lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey {
    pub resource_type: ResourceType,
    pub name: String,
}

impl ConfigKey {
    pub fn topic(name: impl Into<String>) -> Self {
        Self {
            resource_type: ResourceType::Topic,
            name: name.into(),
        }
    }
}

/// Raw description of one topic as produced by the admin protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDescription {
    pub name: String,
    pub id: Option<Uuid>,
    pub internal: bool,
    pub partitions: Vec<PartitionDescription>,
    pub authorized_operations: Option<Vec<String>>,
}

/// Raw description of one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionDescription {
    pub partition: i32,
    pub leader: Option<i32>,
    pub replicas: Vec<i32>,
    pub isr: Vec<i32>,
}

/// Raw outcome of one partition's offset lookup. A `timestamp` of `-1`
/// means the broker did not associate a timestamp with the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedOffset {
    pub offset: i64,
    pub timestamp: i64,
    pub leader_epoch: Option<i32>,
}

impl From<ListedOffset> for OffsetInfo {
    fn from(listed: ListedOffset) -> Self {
        OffsetInfo {
            offset: listed.offset,
            timestamp: (listed.timestamp != -1)
                .then(|| DateTime::from_timestamp_millis(listed.timestamp))
                .flatten(),
            leader_epoch: listed.leader_epoch,
        }
    }
}

impl From<PartitionDescription> for PartitionInfo {
    fn from(description: PartitionDescription) -> Self {
        PartitionInfo {
            partition: description.partition,
            leader: description.leader,
            replicas: description.replicas,
            isr: description.isr,
            offset: None,
        }
    }
}

impl From<TopicDescription> for Topic {
    fn from(description: TopicDescription) -> Self {
        Topic {
            id: description.id.map(|id| id.to_string()),
            name: Some(description.name),
            internal: Some(description.internal),
            partitions: Some(Either::Primary(
                description
                    .partitions
                    .into_iter()
                    .map(PartitionInfo::from)
                    .collect(),
            )),
            configs: None,
            authorized_operations: description
                .authorized_operations
                .map(Either::Primary),
        }
    }
}

/// The abstract cluster-management capability.
///
/// Implementations own connection, retry, and timeout policy; the console
/// core imposes none of its own. A method-level `Err` is a submission fault
/// (the batched call could not be issued), while failures of individual keys
/// surface through the returned [`AdminFuture`]s or embedded [`Either`]s.
#[async_trait]
pub trait AdminClient: Send + Sync {
    /// Names of all topics, optionally including internal ones.
    async fn list_topic_names(&self, include_internal: bool) -> crate::Result<Vec<String>>;

    /// Issue a batched describe; one independently resolvable future per
    /// requested name. The returned map's key set equals `names`.
    async fn describe_topics(
        &self,
        names: &[String],
    ) -> crate::Result<HashMap<String, AdminFuture<TopicDescription>>>;

    /// Issue one batched offset lookup; one future per requested partition.
    async fn list_offsets(
        &self,
        requests: &[(TopicPartition, OffsetQuery)],
    ) -> crate::Result<HashMap<TopicPartition, AdminFuture<ListedOffset>>>;

    /// Look up configurations for a batch of resources. The whole batch
    /// settles at once; per-resource failures are embedded alternates.
    async fn describe_configs(
        &self,
        keys: &[ConfigKey],
    ) -> crate::Result<HashMap<ConfigKey, Either<BTreeMap<String, ConfigEntry>, Fault>>>;

    /// Create a topic.
    async fn create_topic(&self, topic: &NewTopic) -> crate::Result<()>;

    /// Grow a topic to `partitions.total_count` partitions.
    async fn create_partitions(
        &self,
        name: &str,
        partitions: &NewPartitions,
    ) -> crate::Result<()>;

    /// Issue a batched delete; one future per topic name.
    async fn delete_topics(
        &self,
        names: &[String],
    ) -> crate::Result<HashMap<String, AdminFuture<()>>>;

    /// Replace a resource's dynamic configuration, returning the resulting
    /// entries.
    async fn alter_configs(
        &self,
        key: &ConfigKey,
        configs: &BTreeMap<String, ConfigEntry>,
    ) -> crate::Result<BTreeMap<String, ConfigEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_query_named_specs_are_case_sensitive() {
        assert_eq!("earliest".parse(), Ok(OffsetQuery::Earliest));
        assert_eq!("latest".parse(), Ok(OffsetQuery::Latest));
        assert_eq!("maxTimestamp".parse(), Ok(OffsetQuery::MaxTimestamp));

        assert!(matches!(
            "Earliest".parse::<OffsetQuery>(),
            Err(Fault::InvalidOffsetSpec(_))
        ));
        assert!(matches!(
            "maxtimestamp".parse::<OffsetQuery>(),
            Err(Fault::InvalidOffsetSpec(_))
        ));
    }

    #[test]
    fn offset_query_falls_back_to_iso_instants() {
        let parsed = "2024-01-15T10:30:00Z".parse::<OffsetQuery>().unwrap();
        match parsed {
            OffsetQuery::ForTimestamp(instant) => {
                assert_eq!(instant.timestamp_millis(), 1_705_314_600_000);
            }
            other => panic!("expected ForTimestamp, got {other:?}"),
        }

        assert!(matches!(
            "five minutes ago".parse::<OffsetQuery>(),
            Err(Fault::InvalidOffsetSpec(_))
        ));
    }

    #[test]
    fn listed_offset_timestamp_sentinel_maps_to_none() {
        let info: OffsetInfo = ListedOffset {
            offset: 7,
            timestamp: -1,
            leader_epoch: None,
        }
        .into();
        assert_eq!(info.timestamp, None);

        let info: OffsetInfo = ListedOffset {
            offset: 7,
            timestamp: 1_705_314_600_000,
            leader_epoch: Some(2),
        }
        .into();
        assert_eq!(info.timestamp.unwrap().timestamp_millis(), 1_705_314_600_000);
    }
}
