//! # Kafmin Core
//!
//! Core library for the kafmin management console. It turns the cluster's
//! administrative protocol, consumed as an opaque [`admin::AdminClient`]
//! capability, into the console's own describe/list/create/mutate operations.
//!
//! ## Architecture
//!
//! - [`admin`]: the capability trait and its wire-adjacent data shapes
//! - [`fanout`]: keyed fan-out/fan-in over independently resolvable futures
//! - [`service`]: the description orchestrator, listing assembler, and the
//!   single-call delegations
//! - [`query`]: comparator registry and cursor-based pagination support
//!
//! The core is stateless between calls and owns no threads; everything is
//! composed over the caller-supplied async substrate. Per-entity remote
//! failures are recovered into [`kafmin_model::Either`] alternates, and only
//! submission-level faults surface as errors from the operations themselves.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod admin;
pub mod error;
pub mod fanout;
pub mod query;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use admin::{AdminClient, AdminFuture, OffsetQuery, TopicPartition};
pub use error::Result;
pub use service::Include;
pub use service::configs::ConfigService;
pub use service::topics::TopicService;
