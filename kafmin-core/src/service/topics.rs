//! Topic describe/list orchestration and the single-call delegations.
//!
//! Describing a batch of topics composes three concern lanes:
//!
//! 1. the description lane, one independently resolvable call per name;
//! 2. the offset lane, ONE batched lookup derived from the partitions of
//!    every successfully described topic, issued only after the description
//!    lane has settled;
//! 3. the config lane, one batched lookup across all names, unordered
//!    relative to the other two.
//!
//! A failed remote call for one entity or partition is recovered into that
//! entity's [`Either`] slot and never aborts sibling work; only a fault in
//! issuing a batched call (or an unparsable offset spec) fails the whole
//! operation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use dashmap::DashMap;
use kafmin_model::{ConfigEntry, Either, Fault, NewPartitions, NewTopic, OffsetInfo, Topic};
use tracing::{debug, warn};

use crate::Result;
use crate::admin::{AdminClient, ConfigKey, OffsetQuery, TopicPartition};
use crate::fanout::gather_keyed;
use crate::query::sort;
use crate::service::Include;
use crate::service::configs::ConfigService;

type Described = BTreeMap<String, Either<Topic, Fault>>;
type ConfigsByKey = HashMap<ConfigKey, Either<BTreeMap<String, ConfigEntry>, Fault>>;

/// Console-facing operations on topics.
pub struct TopicService {
    admin: Arc<dyn AdminClient>,
    configs: ConfigService,
}

impl TopicService {
    pub fn new(admin: Arc<dyn AdminClient>) -> Self {
        Self {
            configs: ConfigService::new(admin.clone()),
            admin,
        }
    }

    /// Create a topic, echoing the accepted request back on success.
    pub async fn create_topic(&self, topic: NewTopic) -> Result<NewTopic> {
        debug!(topic = %topic.name, "creating topic");
        self.admin.create_topic(&topic).await?;
        Ok(topic)
    }

    /// List topics, augmented with the requested sections and sorted by
    /// name.
    ///
    /// Topics whose description failed outright are dropped from the
    /// listing; when every topic's description failed, that is indistinct
    /// from a cluster-wide outage, and the first captured fault is surfaced
    /// as the request's own error rather than being hidden behind an empty
    /// success list.
    pub async fn list_topics(
        &self,
        list_internal: bool,
        includes: &[Include],
        offset_spec: &str,
    ) -> Result<Vec<Topic>> {
        let names = self.admin.list_topic_names(list_internal).await?;
        debug!(topics = names.len(), "listing topics");

        let mut topics: BTreeMap<String, Topic> = names
            .into_iter()
            .map(|name| (name.clone(), Topic::from_listing(name)))
            .collect();

        let names: Vec<String> = topics.keys().cloned().collect();
        let describe_requested = includes
            .iter()
            .any(|include| matches!(include, Include::Partitions | Include::AuthorizedOperations));

        let (descriptions, configs) = tokio::try_join!(
            self.maybe_lane_descriptions(describe_requested, &names, includes, offset_spec),
            self.maybe_lane_configs(&names, includes),
        )?;

        if let Some(mut configs) = configs {
            for (name, topic) in topics.iter_mut() {
                topic.add_configs(take_config_section(&mut configs, name));
            }
        }

        if let Some(descriptions) = descriptions {
            let total = topics.len();
            let mut failures = 0usize;
            let mut first_fault = None;

            for (name, described) in descriptions {
                match described {
                    Either::Primary(full) => {
                        if let Some(target) = topics.get_mut(&name) {
                            target.id = full.id;
                            target.internal = full.internal;
                            target.partitions = full.partitions;
                            target.authorized_operations = full.authorized_operations;
                        }
                    }
                    Either::Alternate(fault) => {
                        warn!(topic = %name, fault = %fault, "dropping topic from listing");
                        topics.remove(&name);
                        failures += 1;
                        first_fault.get_or_insert(fault);
                    }
                }
            }

            if total > 0
                && failures == total
                && let Some(fault) = first_fault
            {
                return Err(fault);
            }
        }

        let mut list: Vec<Topic> = topics.into_values().collect();
        sort::sort_topics(&mut list, &[]);
        Ok(list)
    }

    /// Describe one topic. A failed description surfaces that topic's own
    /// fault as the operation error.
    pub async fn describe_topic(
        &self,
        name: &str,
        includes: &[Include],
        offset_spec: &str,
    ) -> Result<Topic> {
        let names = [name.to_owned()];
        let mut results = self.describe_topics(&names, includes, offset_spec).await?;

        match results.remove(name) {
            Some(Either::Primary(topic)) => Ok(topic),
            Some(Either::Alternate(fault)) => Err(fault),
            None => Err(Fault::NotFound(name.to_owned())),
        }
    }

    /// Describe a batch of topics; the result's key set equals `names`.
    ///
    /// The description lane always runs; the offset and config lanes run
    /// when their sections are included. The aggregate fails only when a
    /// lane could not be issued, never because individual keys failed.
    pub async fn describe_topics(
        &self,
        names: &[String],
        includes: &[Include],
        offset_spec: &str,
    ) -> Result<Described> {
        let offset_query: OffsetQuery = offset_spec.parse()?;

        let (mut descriptions, configs) = tokio::try_join!(
            self.lane_descriptions(names, includes, offset_query),
            self.maybe_lane_configs(names, includes),
        )?;

        if let Some(mut configs) = configs {
            for (name, described) in descriptions.iter_mut() {
                if let Some(topic) = described.primary_mut() {
                    topic.add_configs(take_config_section(&mut configs, name));
                }
            }
        }

        Ok(descriptions)
    }

    /// Delete topics, collecting per-topic failures into the returned map.
    /// An empty map means every deletion succeeded.
    pub async fn delete_topics(&self, names: &[String]) -> Result<BTreeMap<String, Fault>> {
        let pending = self.admin.delete_topics(names).await?;
        let results = gather_keyed(pending, |deleted| deleted).await;

        Ok(results
            .into_iter()
            .filter_map(|(name, outcome)| {
                outcome.into_alternate().map(|fault| {
                    warn!(topic = %name, fault = %fault, "unable to delete topic");
                    (name, fault)
                })
            })
            .collect())
    }

    /// Grow a topic's partition count.
    pub async fn create_partitions(&self, name: &str, partitions: &NewPartitions) -> Result<()> {
        debug!(topic = name, total = partitions.total_count, "creating partitions");
        self.admin.create_partitions(name, partitions).await
    }

    /// Single-topic config lookup.
    pub async fn describe_configs(&self, name: &str) -> Result<BTreeMap<String, ConfigEntry>> {
        self.configs.describe_topic_configs(name).await
    }

    /// Single-topic config replacement.
    pub async fn alter_configs(
        &self,
        name: &str,
        configs: &BTreeMap<String, ConfigEntry>,
    ) -> Result<BTreeMap<String, ConfigEntry>> {
        self.configs.alter_topic_configs(name, configs).await
    }

    /// The offset spec is parsed here, not by the caller: a listing that
    /// runs no describe lane never issues an offset lookup and accepts any
    /// spec string.
    async fn maybe_lane_descriptions(
        &self,
        requested: bool,
        names: &[String],
        includes: &[Include],
        offset_spec: &str,
    ) -> Result<Option<Described>> {
        if !requested {
            return Ok(None);
        }
        let offset_query: OffsetQuery = offset_spec.parse()?;
        self.lane_descriptions(names, includes, offset_query)
            .await
            .map(Some)
    }

    async fn maybe_lane_configs(
        &self,
        names: &[String],
        includes: &[Include],
    ) -> Result<Option<ConfigsByKey>> {
        if !includes.contains(&Include::Configs) {
            return Ok(None);
        }
        let keys: Vec<ConfigKey> = names.iter().map(ConfigKey::topic).collect();
        self.configs.describe_configs(&keys).await.map(Some)
    }

    /// The description lane, with the offset lane chained after it when
    /// partitions were requested. Sections outside the requested set are
    /// dropped before the results leave the lane.
    async fn lane_descriptions(
        &self,
        names: &[String],
        includes: &[Include],
        offset_query: OffsetQuery,
    ) -> Result<Described> {
        let want_partitions = includes.contains(&Include::Partitions);
        let want_operations = includes.contains(&Include::AuthorizedOperations);

        let pending = self.admin.describe_topics(names).await?;
        let results = gather_keyed(pending, Topic::from).await;

        if want_partitions {
            self.resolve_offsets(&results, offset_query).await?;
        }

        let mut described = BTreeMap::new();
        for (name, mut outcome) in results {
            if let Some(topic) = outcome.primary_mut() {
                if !want_partitions {
                    topic.partitions = None;
                }
                if !want_operations {
                    topic.authorized_operations = None;
                }
            }
            described.insert(name, outcome);
        }
        Ok(described)
    }

    /// The offset lane: derive `(topic, partition)` pairs from every
    /// successful description, issue one batched lookup, and merge each
    /// partition's outcome back into its owning topic. Topics whose
    /// description failed have no known partitions and contribute nothing.
    async fn resolve_offsets(
        &self,
        results: &DashMap<String, Either<Topic, Fault>>,
        offset_query: OffsetQuery,
    ) -> Result<()> {
        let mut requests = Vec::new();
        for entry in results.iter() {
            let Some(topic) = entry.value().primary() else {
                continue;
            };
            for partition in topic.partitions_primary().unwrap_or(&[]) {
                requests.push((
                    TopicPartition::new(entry.key().clone(), partition.partition),
                    offset_query,
                ));
            }
        }

        if requests.is_empty() {
            return Ok(());
        }
        debug!(partitions = requests.len(), "resolving offsets");

        let pending = self.admin.list_offsets(&requests).await?;
        let offsets = gather_keyed(pending, OffsetInfo::from).await;

        for (partition, outcome) in offsets {
            if let Some(mut entry) = results.get_mut(&partition.topic)
                && let Some(topic) = entry.value_mut().primary_mut()
            {
                topic.add_offset(partition.partition, outcome);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for TopicService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopicService").finish_non_exhaustive()
    }
}

/// Pull one topic's config outcome out of the batch, faulting the section
/// when the batch reply did not cover the key at all.
fn take_config_section(
    configs: &mut ConfigsByKey,
    name: &str,
) -> Either<BTreeMap<String, ConfigEntry>, Fault> {
    configs
        .remove(&ConfigKey::topic(name))
        .unwrap_or_else(|| Either::Alternate(Fault::NotFound(name.to_owned())))
}
