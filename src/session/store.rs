//! Generic per-visit session store

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

struct Entry<T> {
    value: T,
    opened_at: DateTime<Utc>,
    last_seen: Instant,
}

/// Sessions keyed by a random id
///
/// Values are only reachable through closures, so no lock can be held
/// across an `.await`.
pub struct SessionStore<T> {
    sessions: DashMap<Uuid, Entry<T>>,
}

impl<T> SessionStore<T> {
    pub fn new() -> Self {
        SessionStore {
            sessions: DashMap::new(),
        }
    }

    /// Store a fresh session and return its id
    pub fn open(&self, value: T) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            Entry {
                value,
                opened_at: Utc::now(),
                last_seen: Instant::now(),
            },
        );
        id
    }

    /// Read a session, refreshing its idle timer
    pub fn with<R>(&self, id: &Uuid, f: impl FnOnce(&T, DateTime<Utc>) -> R) -> Option<R> {
        self.sessions.get_mut(id).map(|mut entry| {
            entry.last_seen = Instant::now();
            f(&entry.value, entry.opened_at)
        })
    }

    /// Mutate a session, refreshing its idle timer
    pub fn with_mut<R>(&self, id: &Uuid, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.sessions.get_mut(id).map(|mut entry| {
            entry.last_seen = Instant::now();
            f(&mut entry.value)
        })
    }

    /// Discard a session
    pub fn close(&self, id: &Uuid) -> Option<T> {
        self.sessions.remove(id).map(|(_, entry)| entry.value)
    }

    /// Drop sessions idle for at least `ttl`, returning how many were dropped
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| entry.last_seen.elapsed() < ttl);
        before.saturating_sub(self.sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<T> Default for SessionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_mutate_close() {
        let store = SessionStore::new();
        let id = store.open(1u32);

        assert_eq!(store.with_mut(&id, |v| { *v += 1; *v }), Some(2));
        assert_eq!(store.with(&id, |v, _| *v), Some(2));
        assert_eq!(store.close(&id), Some(2));
        assert!(store.is_empty());
        assert_eq!(store.with(&id, |v, _| *v), None);
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new();
        let a = store.open(String::from("a"));
        let b = store.open(String::from("b"));

        store.with_mut(&a, |v| v.push('!'));

        assert_eq!(store.with(&a, |v, _| v.clone()).as_deref(), Some("a!"));
        assert_eq!(store.with(&b, |v, _| v.clone()).as_deref(), Some("b"));
    }

    #[test]
    fn test_evict_idle() {
        let store = SessionStore::new();
        store.open(());
        store.open(());

        assert_eq!(store.evict_idle(Duration::from_secs(3600)), 0);
        assert_eq!(store.evict_idle(Duration::ZERO), 2);
        assert!(store.is_empty());
    }
}
