//! Key-addressed query cache with manual invalidation.
//!
//! The client holds no authoritative state: every entry is a JSON snapshot
//! of a backend response, keyed by collection identity and invalidated
//! explicitly after each mutation that affects it. A stale read can briefly
//! follow a write from another component until invalidation completes; the
//! backend remains the source of truth.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use spnportal_core::SpnId;

use crate::http::ApiError;

/// Identity of a cached query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The SPN collection.
    Spns,
    /// A single SPN.
    Spn(SpnId),
    /// The secret collection of one SPN.
    Secrets(SpnId),
    /// The owner collection of one SPN.
    Owners(SpnId),
}

impl QueryKey {
    /// Keys whose cached value is affected by a mutation addressed at this
    /// key.
    ///
    /// A secret mutation also invalidates the parent SPN and the SPN list
    /// because `secretCount` is derived from the secret list length.
    pub fn invalidation_set(&self) -> Vec<QueryKey> {
        match self {
            QueryKey::Spns => vec![QueryKey::Spns],
            QueryKey::Spn(id) => vec![QueryKey::Spn(id.clone()), QueryKey::Spns],
            QueryKey::Secrets(id) => vec![
                QueryKey::Secrets(id.clone()),
                QueryKey::Spn(id.clone()),
                QueryKey::Spns,
            ],
            QueryKey::Owners(id) => vec![QueryKey::Owners(id.clone())],
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    value: serde_json::Value,
    cached_at: DateTime<Utc>,
}

/// Request cache shared by all views.
///
/// Cheap to clone; entries are JSON snapshots so one cache serves every
/// response type. Values containing one-time material (`secretText`) must
/// never be inserted.
#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
    stale_after: Duration,
}

impl QueryCache {
    /// Default staleness window for cached reads.
    pub fn new() -> Self {
        Self::with_stale_after(Duration::seconds(30))
    }

    pub fn with_stale_after(stale_after: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            stale_after,
        }
    }

    /// Fresh cached value for `key`, if any. Stale or undecodable entries
    /// are treated as misses.
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;
        if Utc::now().signed_duration_since(entry.cached_at) > self.stale_after {
            return None;
        }
        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(?key, error = %err, "discarding undecodable cache entry");
                None
            }
        }
    }

    pub fn insert<T: Serialize>(&self, key: QueryKey, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(?key, error = %err, "failed to serialize cache entry");
                return;
            }
        };
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key,
                Entry {
                    value,
                    cached_at: Utc::now(),
                },
            );
        }
    }

    /// Drop a single entry.
    pub fn invalidate(&self, key: &QueryKey) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    /// Drop every entry affected by a mutation addressed at `key`, per
    /// [`QueryKey::invalidation_set`].
    pub fn invalidate_after(&self, key: &QueryKey) {
        if let Ok(mut entries) = self.entries.lock() {
            for affected in key.invalidation_set() {
                entries.remove(&affected);
            }
        }
    }

    /// Serve a fresh cached value or run `fetch`, caching its result.
    pub async fn fetch_with<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(hit) = self.get::<T>(&key) {
            return Ok(hit);
        }
        let value = fetch().await?;
        self.insert(key, &value);
        Ok(value)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spn_id() -> SpnId {
        SpnId::new("spn-001")
    }

    #[test]
    fn insert_then_get_round_trips() {
        let cache = QueryCache::new();
        cache.insert(QueryKey::Spns, &vec!["a".to_string(), "b".to_string()]);

        let hit: Option<Vec<String>> = cache.get(&QueryKey::Spns);
        assert_eq!(hit, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn stale_entries_are_misses() {
        let cache = QueryCache::with_stale_after(Duration::seconds(-1));
        cache.insert(QueryKey::Spns, &1u32);
        assert_eq!(cache.get::<u32>(&QueryKey::Spns), None);
    }

    #[test]
    fn secret_mutation_invalidates_derived_aggregates() {
        let cache = QueryCache::new();
        cache.insert(QueryKey::Spns, &1u32);
        cache.insert(QueryKey::Spn(spn_id()), &2u32);
        cache.insert(QueryKey::Secrets(spn_id()), &3u32);
        cache.insert(QueryKey::Owners(spn_id()), &4u32);

        cache.invalidate_after(&QueryKey::Secrets(spn_id()));

        assert_eq!(cache.get::<u32>(&QueryKey::Spns), None);
        assert_eq!(cache.get::<u32>(&QueryKey::Spn(spn_id())), None);
        assert_eq!(cache.get::<u32>(&QueryKey::Secrets(spn_id())), None);
        // Owner reads are unaffected by secret mutations.
        assert_eq!(cache.get::<u32>(&QueryKey::Owners(spn_id())), Some(4));
    }

    #[test]
    fn owner_mutation_leaves_spn_list_alone() {
        let cache = QueryCache::new();
        cache.insert(QueryKey::Spns, &1u32);
        cache.insert(QueryKey::Owners(spn_id()), &2u32);

        cache.invalidate_after(&QueryKey::Owners(spn_id()));

        assert_eq!(cache.get::<u32>(&QueryKey::Spns), Some(1));
        assert_eq!(cache.get::<u32>(&QueryKey::Owners(spn_id())), None);
    }

    #[tokio::test]
    async fn fetch_with_caches_the_fetched_value() {
        let cache = QueryCache::new();

        let first = cache
            .fetch_with(QueryKey::Spns, || async { Ok::<_, ApiError>(41u32) })
            .await
            .unwrap();
        assert_eq!(first, 41);

        // Second call must be served from cache, not the fetcher.
        let second = cache
            .fetch_with(QueryKey::Spns, || async {
                Err::<u32, _>(ApiError::Decode("fetcher must not run".to_string()))
            })
            .await
            .unwrap();
        assert_eq!(second, 41);
    }
}
