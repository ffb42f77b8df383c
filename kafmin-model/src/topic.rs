//! Topic entity and its lane-populated sections.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ConfigEntry;
use crate::cursor::{self, CursorError};
use crate::either::Either;
use crate::fault::Fault;

/// Sort-field names accepted by topic listings.
pub mod fields {
    pub const NAME: &str = "name";
    pub const INTERNAL: &str = "internal";

    /// Fields projected into a topic cursor.
    pub const CURSOR: &[&str] = &[NAME, INTERNAL];
}

/// Offset snapshot for one partition, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetInfo {
    pub offset: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_epoch: Option<i32>,
}

/// One partition of a described topic.
///
/// The `offset` section is populated by the offset-resolution lane and stays
/// `None` when offsets were not requested or the owning description failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionInfo {
    pub partition: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader: Option<i32>,
    pub replicas: Vec<i32>,
    pub isr: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Either<OffsetInfo, Fault>>,
}

impl PartitionInfo {
    pub fn new(partition: i32) -> Self {
        Self {
            partition,
            leader: None,
            replicas: Vec::new(),
            isr: Vec::new(),
            offset: None,
        }
    }
}

/// A describable topic.
///
/// Only identity is guaranteed; every section is optional and populated
/// independently by its own lane. A topic is valid for listing even when all
/// sections are absent, and a section-level failure is carried inside the
/// section's [`Either`] rather than invalidating the topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions: Option<Either<Vec<PartitionInfo>, Fault>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Either<BTreeMap<String, ConfigEntry>, Fault>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorized_operations: Option<Either<Vec<String>, Fault>>,
}

impl Topic {
    /// A bare topic known only by name, as produced by a name listing.
    pub fn from_listing(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn add_partitions(&mut self, partitions: Either<Vec<PartitionInfo>, Fault>) {
        self.partitions = Some(partitions);
    }

    pub fn add_configs(&mut self, configs: Either<BTreeMap<String, ConfigEntry>, Fault>) {
        self.configs = Some(configs);
    }

    pub fn add_authorized_operations(&mut self, operations: Either<Vec<String>, Fault>) {
        self.authorized_operations = Some(operations);
    }

    /// The successfully described partitions, when the section is present and
    /// its description lane succeeded.
    pub fn partitions_primary(&self) -> Option<&[PartitionInfo]> {
        self.partitions
            .as_ref()
            .and_then(Either::primary)
            .map(Vec::as_slice)
    }

    /// Attach an offset-lane outcome to the owning partition, located by
    /// linear lookup. Ignored when the partition is unknown, which can only
    /// happen if the offset request was derived from a different description
    /// than the one stored here.
    pub fn add_offset(&mut self, partition: i32, offset: Either<OffsetInfo, Fault>) {
        if let Some(partitions) = self.partitions.as_mut().and_then(Either::primary_mut)
            && let Some(entry) = partitions.iter_mut().find(|p| p.partition == partition)
        {
            entry.offset = Some(offset);
        }
    }

    /// Encode this topic's pagination cursor: identity plus the attributes
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
            fields::INTERNAL,
            self.internal.map(Value::Bool),
        );
        cursor::encode(self.id.as_deref().unwrap_or(""), attributes)
    }

    /// Rebuild the skeleton topic a cursor was derived from. The result
    /// carries identity and the projected attributes only and is usable
    /// solely for comparison.
    pub fn from_cursor(token: &str) -> Result<Self, CursorError> {
        let (id, attributes) = cursor::decode(token)?;

        Ok(Self {
            id: (!id.is_empty()).then_some(id),
            name: attributes
                .get(fields::NAME)
                .and_then(Value::as_str)
                .map(str::to_owned),
            internal: attributes.get(fields::INTERNAL).and_then(Value::as_bool),
            ..Self::default()
        })
    }
}
