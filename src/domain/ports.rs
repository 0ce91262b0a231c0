use std::collections::HashMap;
use std::sync::RwLock;

/// Memo store for derived domain labels, keyed by host string.
pub trait DomainCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn insert(&self, key: String, label: String);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime cache backed by a lock-guarded map. Never evicts.
#[derive(Debug, Default)]
pub struct MemoryDomainCache {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryDomainCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainCache for MemoryDomainCache {
    fn get(&self, key: &str) -> Option<String> {
        // A poisoned lock still holds a consistent map: inserts are single calls.
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn insert(&self, key: String, label: String) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, label);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
