use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::NutrientProfile;

/// Decides when a cached entry is stale.
pub trait EvictionPolicy {
    fn is_expired(&self, age: Duration) -> bool;
}

/// Entries expire once they are `ttl` old.
#[derive(Debug, Clone, Copy)]
pub struct TtlPolicy {
    pub ttl: Duration,
}

impl EvictionPolicy for TtlPolicy {
    fn is_expired(&self, age: Duration) -> bool {
        age >= self.ttl
    }
}

/// Entries never expire; only capacity evicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverExpire;

impl EvictionPolicy for NeverExpire {
    fn is_expired(&self, _age: Duration) -> bool {
        false
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    profile: NutrientProfile,
    inserted: Instant,
}

/// Per-gram nutrient profiles keyed by lowercase food name.
///
/// Owned by the caller and passed to lookups explicitly.
#[derive(Debug)]
pub struct NutrientCache<P: EvictionPolicy> {
    entries: HashMap<String, CacheEntry>,
    policy: P,
    capacity: usize,
}

impl<P: EvictionPolicy> NutrientCache<P> {
    /// A cache holding at most `capacity` foods (minimum 1).
    pub fn new(policy: P, capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
            capacity: capacity.max(1),
        }
    }

    /// Fresh profile for `food`, dropping it if expired.
    pub fn get(&mut self, food: &str) -> Option<NutrientProfile> {
        let key = food.to_lowercase();
        let entry = self.entries.get(&key)?;
        if self.policy.is_expired(entry.inserted.elapsed()) {
            self.entries.remove(&key);
            return None;
        }
        Some(entry.profile)
    }

    /// Store `profile`, evicting the oldest entry when full.
    pub fn insert(&mut self, food: &str, profile: NutrientProfile) {
        let key = food.to_lowercase();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, e)| e.inserted)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(
            key,
            CacheEntry {
                profile,
                inserted: Instant::now(),
            },
        );
    }

    /// Drop every expired entry.
    pub fn purge_expired(&mut self) {
        let policy = &self.policy;
        self.entries
            .retain(|_, e| !policy.is_expired(e.inserted.elapsed()));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(c: f64) -> NutrientProfile {
        NutrientProfile::new(c, 0.0, 0.0)
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let mut cache = NutrientCache::new(NeverExpire, 4);
        cache.insert("Avocado", profile(0.014));
        assert_eq!(cache.get("avocado"), Some(profile(0.014)));
        assert_eq!(cache.get("lentils"), None);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let mut cache = NutrientCache::new(
            TtlPolicy {
                ttl: Duration::ZERO,
            },
            4,
        );
        cache.insert("rice", profile(0.28));
        assert_eq!(cache.get("rice"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_long_ttl_keeps_entries() {
        let mut cache = NutrientCache::new(
            TtlPolicy {
                ttl: Duration::from_secs(3600),
            },
            4,
        );
        cache.insert("rice", profile(0.28));
        cache.purge_expired();
        assert_eq!(cache.get("rice"), Some(profile(0.28)));
    }

    #[test]
    fn test_capacity_evicts_one_entry() {
        let mut cache = NutrientCache::new(NeverExpire, 2);
        cache.insert("a", profile(1.0));
        cache.insert("b", profile(2.0));
        cache.insert("b", profile(3.0));
        assert_eq!(cache.len(), 2);

        cache.insert("c", profile(4.0));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("c"), Some(profile(4.0)));
    }

    #[test]
    fn test_clear() {
        let mut cache = NutrientCache::new(NeverExpire, 2);
        cache.insert("a", profile(1.0));
        cache.clear();
        assert!(cache.is_empty());
    }
}
