//! Shared data models for the kafmin management console.
//!
//! This crate centralizes the entity types exchanged between the console's
//! services and its callers: topics with their lane-populated optional
//! sections, cluster records, configuration entries, the [`Either`] result
//! union used for partial failure, and the cursor codec that backs paginated
//! listings. Everything here is plain data; orchestration lives in
//! `kafmin-core`.

pub mod config;
pub mod cursor;
pub mod either;
pub mod fault;
pub mod kafka_cluster;
pub mod requests;
pub mod topic;

pub use config::{ConfigEntry, ConfigSource};
pub use cursor::CursorError;
pub use either::Either;
pub use fault::Fault;
pub use kafka_cluster::{Condition, KafkaCluster, KafkaListener, Node};
pub use requests::{NewPartitions, NewTopic};
pub use topic::{OffsetInfo, PartitionInfo, Topic};
