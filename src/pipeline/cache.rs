use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sha2::{Digest, Sha256};
use tokio::sync::OnceCell;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::models::Detection;

/// SHA-256 hex digest used as the cache key.
pub fn fingerprint(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

struct Slot {
    created: Instant,
    cell: Arc<OnceCell<Detection>>,
}

/// Time-bounded memo of detections keyed by fingerprint.
///
/// Each key owns a single [`OnceCell`], so concurrent callers for the same key
/// share one computation. The computation runs in its own task and fills the
/// cell even when every caller has gone away.
pub struct DetectionCache {
    ttl: Duration,
    slots: Mutex<HashMap<String, Slot>>,
}

impl DetectionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached detection for `key`, or run `compute` to produce it.
    pub async fn get_or_compute<F, Fut>(&self, key: &str, compute: F) -> Detection
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Detection> + Send + 'static,
    {
        let cell = self.slot(key);
        if let Some(hit) = cell.get() {
            debug!(key, "detection cache hit");
            return hit.clone();
        }

        let fut = compute();
        let handle = tokio::spawn(async move { cell.get_or_init(|| fut).await.clone() });
        match handle.await {
            Ok(detection) => detection,
            Err(e) => {
                warn!(key, error = %e, "detection task failed");
                Detection::Unknown
            }
        }
    }

    /// Fresh, completed entry for `key`.
    pub fn get(&self, key: &str) -> Option<Detection> {
        let slots = self.lock();
        slots
            .get(key)
            .filter(|s| s.created.elapsed() < self.ttl)
            .and_then(|s| s.cell.get().cloned())
    }

    /// Number of live slots, including in-flight ones.
    pub fn len(&self) -> usize {
        let mut slots = self.lock();
        self.purge(&mut slots);
        slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn slot(&self, key: &str) -> Arc<OnceCell<Detection>> {
        let mut slots = self.lock();
        self.purge(&mut slots);
        slots
            .entry(key.to_string())
            .or_insert_with(|| Slot {
                created: Instant::now(),
                cell: Arc::new(OnceCell::new()),
            })
            .cell
            .clone()
    }

    fn purge(&self, slots: &mut HashMap<String, Slot>) {
        let ttl = self.ttl;
        slots.retain(|_, s| s.created.elapsed() < ttl);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for DetectionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionCache")
            .field("ttl", &self.ttl)
            .field("slots", &self.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted(calls: &Arc<AtomicUsize>) -> impl Future<Output = Detection> + Send + 'static {
        let calls = Arc::clone(calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Detection::matched("MIT", 0.97, MatchSource::Similarity)
        }
    }

    #[test]
    fn test_fingerprint() {
        let a = fingerprint("opensource.org/licenses/mit");
        assert_eq!(a.len(), 64);
        assert_eq!(a, fingerprint("opensource.org/licenses/mit"));
        assert_ne!(a, fingerprint("opensource.org/licenses/isc"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_within_ttl() {
        let cache = DetectionCache::new(Duration::from_secs(120));
        let calls = Arc::new(AtomicUsize::new(0));

        let first = cache.get_or_compute("k", || counted(&calls)).await;
        let second = cache.get_or_compute("k", || counted(&calls)).await;

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.get("k"), Some(first));
    }

    #[tokio::test(start_paused = true)]
    async fn test_recomputes_after_expiry() {
        let cache = DetectionCache::new(Duration::from_secs(120));
        let calls = Arc::new(AtomicUsize::new(0));

        cache.get_or_compute("k", || counted(&calls)).await;
        tokio::time::advance(Duration::from_secs(121)).await;
        assert!(cache.get("k").is_none());

        cache.get_or_compute("k", || counted(&calls)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_callers_share_one_computation() {
        let cache = DetectionCache::new(Duration::from_secs(120));
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.get_or_compute("k", || counted(&calls)),
            cache.get_or_compute("k", || counted(&calls)),
        );
        assert_eq!(a, b);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_caller_still_fills_cache() {
        let cache = Arc::new(DetectionCache::new(Duration::from_secs(120)));
        let calls = Arc::new(AtomicUsize::new(0));

        let task = {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            tokio::spawn(async move { cache.get_or_compute("k", || counted(&calls)).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        task.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(cache.get("k").is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys() {
        let cache = DetectionCache::new(Duration::from_secs(120));
        cache.get_or_compute("a", || async { Detection::Unknown }).await;
        cache
            .get_or_compute("b", || async {
                Detection::Ignored {
                    pattern: "x".to_string(),
                }
            })
            .await;
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a"), Some(Detection::Unknown));
        cache.clear();
        assert!(cache.is_empty());
    }
}
