//! Keyed fan-out/fan-in over independently resolvable remote calls.

use std::collections::HashMap;
use std::hash::Hash;

use dashmap::DashMap;
use futures::future::join_all;
use kafmin_model::{Either, Fault};

use crate::admin::AdminFuture;

/// Drive every pending per-key call to completion and collect each outcome
/// into a shared keyed map, applying `transform` on the success path.
///
/// Each key's continuation is the only writer of that key's slot, so the map
/// needs no further coordination; this single-writer-per-key discipline is
/// what makes the shared map safe and must be preserved by callers handing
/// in the pending set (one future per key, keys distinct).
///
/// The returned future settles only after all per-key calls have settled,
/// and it cannot fail: individual failures are captured as [`Either`]
/// alternates, never propagated. Submission-level faults belong to whoever
/// issued the batch, before this point.
pub async fn gather_keyed<K, V, T, F>(
    pending: HashMap<K, AdminFuture<V>>,
    transform: F,
) -> DashMap<K, Either<T, Fault>>
where
    K: Eq + Hash,
    F: Fn(V) -> T,
{
    let results = DashMap::with_capacity(pending.len());

    let settled = pending.into_iter().map(|(key, call)| {
        let results = &results;
        let transform = &transform;
        async move {
            let outcome = call.await;
            results.insert(key, Either::of(outcome, transform));
        }
    });

    join_all(settled).await;
    results
}
