//! LRU cache for parsed predicate names
//!
//! A predicate name always parses to the same predicate, so parse results
//! (including "not a predicate") are cached by name. Granted roles are never
//! cached here.

use super::predicate::RolePredicate;
use lru::LruCache;
use std::num::NonZeroUsize;

/// LRU cache of parse results keyed by call name
pub struct PredicateCache {
    cache: LruCache<String, Option<RolePredicate>>,
}

impl PredicateCache {
    /// Create a new cache with given capacity (zero is treated as one)
    pub fn new(capacity: usize) -> Self {
        PredicateCache {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Get a cached parse result
    ///
    /// The outer `Option` is the cache lookup; the inner one is the parse result.
    pub fn get(&mut self, name: &str) -> Option<Option<RolePredicate>> {
        self.cache.get(name).cloned()
    }

    /// Store a parse result
    pub fn put(&mut self, name: &str, predicate: Option<RolePredicate>) {
        self.cache.put(name.to_string(), predicate);
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached names
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of cached names
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}
