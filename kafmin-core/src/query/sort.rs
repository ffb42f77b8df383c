//! Field-name comparator registry for the listable entity types.
//!
//! Registries are plain maps from field name to a pure ordering function,
//! built lazily once and read-only after. Direction is orthogonal: a
//! descending sort reverses the base comparator. Unknown field names fall
//! back to the identity field ascending, and absent values always sort last
//! so that skeleton entities decoded from a cursor (which carry only their
//! projected attributes) still take a total position in the order.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use kafmin_model::{KafkaCluster, Topic, kafka_cluster, topic};
use once_cell::sync::Lazy;

/// A pure, total, deterministic ordering over entities of one type.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A registry entry resolved for one requested `(field, direction)` pair.
pub struct FieldSort<T: 'static> {
    base: Comparator<T>,
    descending: bool,
}

impl<T> FieldSort<T> {
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let ordering = (self.base)(a, b);
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl<T> Clone for FieldSort<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldSort<T> {}

impl<T> fmt::Debug for FieldSort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSort")
            .field("descending", &self.descending)
            .finish_non_exhaustive()
    }
}

static TOPIC_COMPARATORS: Lazy<HashMap<&'static str, Comparator<Topic>>> = Lazy::new(|| {
    HashMap::from([
        ("id", topic_id as Comparator<Topic>),
        (topic::fields::NAME, topic_name as Comparator<Topic>),
        (topic::fields::INTERNAL, topic_internal as Comparator<Topic>),
    ])
});

static CLUSTER_COMPARATORS: Lazy<HashMap<&'static str, Comparator<KafkaCluster>>> =
    Lazy::new(|| {
        HashMap::from([
            ("id", cluster_id as Comparator<KafkaCluster>),
            (kafka_cluster::fields::NAME, cluster_name as Comparator<KafkaCluster>),
            (
                kafka_cluster::fields::NAMESPACE,
                cluster_namespace as Comparator<KafkaCluster>,
            ),
            (
                kafka_cluster::fields::CREATION_TIMESTAMP,
                cluster_creation_timestamp as Comparator<KafkaCluster>,
            ),
        ])
    });

/// Resolve a topic comparator; unknown fields fall back to the stable
/// default (name ascending, the topic's identity within a request scope).
pub fn topic_comparator(field: &str, descending: bool) -> FieldSort<Topic> {
    match TOPIC_COMPARATORS.get(field) {
        Some(&base) => FieldSort { base, descending },
        None => FieldSort {
            base: topic_name,
            descending: false,
        },
    }
}

/// Resolve a cluster comparator; unknown fields fall back to id ascending.
pub fn cluster_comparator(field: &str, descending: bool) -> FieldSort<KafkaCluster> {
    match CLUSTER_COMPARATORS.get(field) {
        Some(&base) => FieldSort { base, descending },
        None => FieldSort {
            base: cluster_id,
            descending: false,
        },
    }
}

/// Total ordering over topics for a requested sort: each `(field,
/// descending)` pair in turn, then name and id as stable tie-breakers.
pub fn topic_order(sort: &[(String, bool)]) -> impl Fn(&Topic, &Topic) -> Ordering + '_ {
    move |a, b| {
        for (field, descending) in sort {
            let ordering = topic_comparator(field, *descending).compare(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        topic_name(a, b).then_with(|| topic_id(a, b))
    }
}

/// Total ordering over clusters for a requested sort, id tie-broken.
pub fn cluster_order(
    sort: &[(String, bool)],
) -> impl Fn(&KafkaCluster, &KafkaCluster) -> Ordering + '_ {
    move |a, b| {
        for (field, descending) in sort {
            let ordering = cluster_comparator(field, *descending).compare(a, b);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        cluster_id(a, b)
    }
}

/// Sort a topic listing in place. An empty sort yields the default order.
pub fn sort_topics(items: &mut [Topic], sort: &[(String, bool)]) {
    let order = topic_order(sort);
    items.sort_by(|a, b| order(a, b));
}

/// Sort a cluster listing in place.
pub fn sort_clusters(items: &mut [KafkaCluster], sort: &[(String, bool)]) {
    let order = cluster_order(sort);
    items.sort_by(|a, b| order(a, b));
}

fn topic_id(a: &Topic, b: &Topic) -> Ordering {
    compare_optional_str(a.id.as_deref(), b.id.as_deref())
}

fn topic_name(a: &Topic, b: &Topic) -> Ordering {
    compare_optional_str(a.name.as_deref(), b.name.as_deref())
}

fn topic_internal(a: &Topic, b: &Topic) -> Ordering {
    compare_optional(a.internal, b.internal)
}

fn cluster_id(a: &KafkaCluster, b: &KafkaCluster) -> Ordering {
    compare_optional_str(a.id.as_deref(), b.id.as_deref())
}

fn cluster_name(a: &KafkaCluster, b: &KafkaCluster) -> Ordering {
    compare_optional_str(a.name.as_deref(), b.name.as_deref())
}

fn cluster_namespace(a: &KafkaCluster, b: &KafkaCluster) -> Ordering {
    compare_optional_str(a.namespace.as_deref(), b.namespace.as_deref())
}

fn cluster_creation_timestamp(a: &KafkaCluster, b: &KafkaCluster) -> Ordering {
    compare_optional_str(
        a.creation_timestamp.as_deref(),
        b.creation_timestamp.as_deref(),
    )
}

fn compare_optional<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_optional_str(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
