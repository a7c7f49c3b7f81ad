//! Response cache with lazy time-to-live expiry
//!
//! Entries are keyed by endpoint plus a canonical encoding of the query
//! parameters. An entry older than the TTL is never served: it is dropped the
//! next time its key is looked up. There is no capacity bound.
//!
//! Concurrent misses on the same key are not de-duplicated, so two
//! simultaneous lookups may both go upstream and both `set` the result.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
    time::{Duration, Instant},
};
use tracing::debug;


/// How long a cached upstream response stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Source of "now" for the cache.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<std::sync::Mutex<Instant>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(std::sync::Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

/// Build the cache key for an endpoint and its query parameters.
///
/// Parameters are encoded as a JSON object with sorted keys and string values;
/// `None` values are skipped, matching how they are left off the request URL.
///
/// ```rust
/// use dukembb::core::cache_key;
///
/// assert_eq!(cache_key("leagues", &[]), "leagues_{}");
/// assert_eq!(
///     cache_key("players", &[("team", Some("1".into())), ("season", Some("2024".into()))]),
///     r#"players_{"season":"2024","team":"1"}"#
/// );
/// ```
pub fn cache_key(endpoint: &str, params: &[(&str, Option<String>)]) -> String {
    let encoded: BTreeMap<&str, &str> = params
        .iter()
        .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v)))
        .collect();
    let json = serde_json::to_string(&encoded).unwrap_or_else(|_| "{}".to_string());
    format!("{}_{}", endpoint, json)
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

/// Key → (value, timestamp) store with a fixed TTL and an injected clock.
pub struct ResponseCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResponseCache<V> {
    /// Create a cache using the wall clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    /// Return the cached value if it is younger than the TTL.
    ///
    /// A stale entry is removed as a side effect.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some(entry) if now.saturating_duration_since(entry.inserted_at) < self.ttl => {
                debug!("Cache hit: key={}", key);
                Some(entry.value.clone())
            }
            Some(entry) => {
                debug!(
                    "Dropping stale cache entry: key={}, age={:?}, ttl={:?}",
                    key,
                    now.saturating_duration_since(entry.inserted_at),
                    self.ttl
                );
                self.entries.remove(key);
                None
            }
            None => {
                debug!("Cache miss: key={}", key);
                None
            }
        }
    }

    /// Insert or overwrite `key`, stamped with the current time.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let inserted_at = self.clock.now();
        self.entries
            .insert(key.into(), CacheEntry { value, inserted_at });
    }

    /// Number of stored entries, fresh or not yet collected.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V: Clone> Default for ResponseCache<V> {
    fn default() -> Self {
        Self::new(CACHE_TTL)
    }
}
