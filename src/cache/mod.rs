//! Expiring key/value cache over a persistent storage medium
//!
//! Each entry is stored as a JSON envelope `{ data, expiry }` with an
//! absolute expiry timestamp in milliseconds. Expired entries are purged
//! lazily, on the read that finds them stale. Writes are best-effort: a
//! failing backend is logged, never surfaced, so `set` and `get` uphold a
//! never-throws contract.

mod storage;

pub use storage::{DiskStorage, MemoryStorage, Storage};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Default entry lifetime in minutes.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Stored envelope around a cached value.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    data: T,
    /// Milliseconds since the Unix epoch.
    expiry: i64,
}

/// TTL cache parameterized by its storage medium.
pub struct Cache<S> {
    storage: S,
}

impl<S: Storage> Cache<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Store `data` under `key` with the default 30-minute lifetime.
    pub fn set<T: Serialize>(&self, key: &str, data: &T) {
        self.set_with_ttl(key, data, DEFAULT_TTL_MINUTES);
    }

    /// Store `data` under `key`, expiring `ttl_minutes` from now.
    pub fn set_with_ttl<T: Serialize>(&self, key: &str, data: &T, ttl_minutes: i64) {
        self.set_at(key, data, ttl_minutes, now_ms());
    }

    fn set_at<T: Serialize>(&self, key: &str, data: &T, ttl_minutes: i64, now_ms: i64) {
        // Saturate so an absurd configured lifetime cannot panic a write.
        let envelope = Envelope {
            data,
            expiry: now_ms.saturating_add(ttl_minutes.saturating_mul(60_000)),
        };
        let json = match serde_json::to_string(&envelope) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("cache write for {:?} failed to serialize: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.storage.write(key, &json) {
            tracing::warn!("cache write for {:?} failed: {}", key, e);
        }
    }

    /// Fetch the value under `key`. Returns `None` when the entry is
    /// absent, unreadable, corrupt, or past its expiry; an expired entry
    /// is removed from storage as a side effect.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_at(key, now_ms())
    }

    fn get_at<T: DeserializeOwned>(&self, key: &str, now_ms: i64) -> Option<T> {
        let raw = match self.storage.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("cache read for {:?} failed: {}", key, e);
                return None;
            }
        };

        // A corrupt envelope is a miss, not an error.
        let envelope: Envelope<T> = serde_json::from_str(&raw).ok()?;

        if now_ms > envelope.expiry {
            tracing::debug!("cache entry {:?} expired", key);
            self.clear(key);
            return None;
        }

        Some(envelope.data)
    }

    /// Unconditionally drop the entry under `key`.
    pub fn clear(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            tracing::warn!("cache removal for {:?} failed: {}", key, e);
        }
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
