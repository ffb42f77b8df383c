//! In-memory admin capability used by the service tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::FutureExt;
use kafmin_model::{ConfigEntry, Either, Fault, NewPartitions, NewTopic};
use uuid::Uuid;

use crate::Result;
use crate::admin::{
    AdminClient, AdminFuture, ConfigKey, ListedOffset, OffsetQuery, PartitionDescription,
    TopicDescription, TopicPartition,
};

fn ready<T: Send + 'static>(outcome: std::result::Result<T, Fault>) -> AdminFuture<T> {
    async move { outcome }.boxed()
}

/// Scriptable fake cluster. Topics present in `topics` describe
/// successfully; anything else resolves to a not-found fault. The
/// `fail_*_submission` switches make the corresponding batched call fail at
/// issue time.
#[derive(Default)]
pub(crate) struct FakeAdmin {
    pub topics: BTreeMap<String, TopicDescription>,
    /// Names reported by the listing but unknown to describe, emulating a
    /// topic deleted between the two calls.
    pub extra_listed: Vec<String>,
    pub configs: BTreeMap<String, BTreeMap<String, ConfigEntry>>,
    pub delete_faults: BTreeMap<String, Fault>,
    pub fail_list_submission: bool,
    pub fail_describe_submission: bool,
    pub fail_offsets_submission: bool,
    pub fail_configs_submission: bool,
    /// Every offset request issued, for asserting lane derivation.
    pub offset_requests: Mutex<Vec<(TopicPartition, OffsetQuery)>>,
}

impl FakeAdmin {
    pub fn with_topic(mut self, name: &str, partitions: i32) -> Self {
        self.topics.insert(
            name.to_owned(),
            TopicDescription {
                name: name.to_owned(),
                id: Some(Uuid::new_v4()),
                internal: false,
                partitions: (0..partitions)
                    .map(|partition| PartitionDescription {
                        partition,
                        leader: Some(1),
                        replicas: vec![1, 2],
                        isr: vec![1, 2],
                    })
                    .collect(),
                authorized_operations: Some(vec!["READ".to_owned(), "WRITE".to_owned()]),
            },
        );
        self
    }

    pub fn with_config(mut self, name: &str, key: &str, value: &str) -> Self {
        self.configs
            .entry(name.to_owned())
            .or_default()
            .insert(key.to_owned(), ConfigEntry::value(value));
        self
    }

    pub fn recorded_offset_requests(&self) -> Vec<(TopicPartition, OffsetQuery)> {
        self.offset_requests.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl AdminClient for FakeAdmin {
    async fn list_topic_names(&self, include_internal: bool) -> Result<Vec<String>> {
        if self.fail_list_submission {
            return Err(Fault::Client("listTopics submission".to_owned()));
        }
        let _ = include_internal;
        let mut names: Vec<String> = self.topics.keys().cloned().collect();
        names.extend(self.extra_listed.iter().cloned());
        Ok(names)
    }

    async fn describe_topics(
        &self,
        names: &[String],
    ) -> Result<HashMap<String, AdminFuture<TopicDescription>>> {
        if self.fail_describe_submission {
            return Err(Fault::Client("describeTopics submission".to_owned()));
        }
        Ok(names
            .iter()
            .map(|name| {
                let outcome = self
                    .topics
                    .get(name)
                    .cloned()
                    .ok_or_else(|| Fault::NotFound(name.clone()));
                (name.clone(), ready(outcome))
            })
            .collect())
    }

    async fn list_offsets(
        &self,
        requests: &[(TopicPartition, OffsetQuery)],
    ) -> Result<HashMap<TopicPartition, AdminFuture<ListedOffset>>> {
        if self.fail_offsets_submission {
            return Err(Fault::Client("listOffsets submission".to_owned()));
        }
        self.offset_requests
            .lock()
            .expect("poisoned")
            .extend(requests.iter().cloned());

        Ok(requests
            .iter()
            .map(|(partition, _)| {
                let listed = ListedOffset {
                    offset: 100 + i64::from(partition.partition),
                    timestamp: -1,
                    leader_epoch: Some(1),
                };
                (partition.clone(), ready(Ok(listed)))
            })
            .collect())
    }

    async fn describe_configs(
        &self,
        keys: &[ConfigKey],
    ) -> Result<HashMap<ConfigKey, Either<BTreeMap<String, ConfigEntry>, Fault>>> {
        if self.fail_configs_submission {
            return Err(Fault::Client("describeConfigs submission".to_owned()));
        }
        Ok(keys
            .iter()
            .map(|key| {
                let outcome = match self.configs.get(&key.name) {
                    Some(entries) => Either::Primary(entries.clone()),
                    None => Either::Alternate(Fault::NotFound(key.name.clone())),
                };
                (key.clone(), outcome)
            })
            .collect())
    }

    async fn create_topic(&self, _topic: &NewTopic) -> Result<()> {
        Ok(())
    }

    async fn create_partitions(&self, name: &str, _partitions: &NewPartitions) -> Result<()> {
        if self.topics.contains_key(name) {
            Ok(())
        } else {
            Err(Fault::NotFound(name.to_owned()))
        }
    }

    async fn delete_topics(&self, names: &[String]) -> Result<HashMap<String, AdminFuture<()>>> {
        Ok(names
            .iter()
            .map(|name| {
                let outcome = match self.delete_faults.get(name) {
                    Some(fault) => Err(fault.clone()),
                    None => Ok(()),
                };
                (name.clone(), ready(outcome))
            })
            .collect())
    }

    async fn alter_configs(
        &self,
        key: &ConfigKey,
        configs: &BTreeMap<String, ConfigEntry>,
    ) -> Result<BTreeMap<String, ConfigEntry>> {
        if self.configs.contains_key(&key.name) {
            Ok(configs.clone())
        } else {
            Err(Fault::NotFound(key.name.clone()))
        }
    }
}
