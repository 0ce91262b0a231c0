use dashfit::{derive_domain, domain_from_host, DomainCache, DomainDerivation, MemoryDomainCache};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

/// Cache that records how often each key is looked up and written.
#[derive(Default)]
struct CountingCache {
    inner: MemoryDomainCache,
    writes: Mutex<HashMap<String, usize>>,
}

impl DomainCache for CountingCache {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn insert(&self, key: String, label: String) {
        *self.writes.lock().unwrap().entry(key.clone()).or_default() += 1;
        self.inner.insert(key, label);
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[test]
fn test_domain_is_idempotent_for_same_input() {
    let cache = MemoryDomainCache::new();

    for host in ["pool.example.com", "stratum+tcp://mining.nicehash.com:3333", "10.0.0.5", "  "] {
        let first = domain_from_host(host, &cache);
        let second = domain_from_host(host, &cache);
        assert_eq!(first, second, "label changed for {:?}", host);
    }
}

#[test]
fn test_scheme_inputs_hit_cache_bare_hosts_recompute() {
    let cache = CountingCache::default();

    domain_from_host("stratum+tcp://mining.nicehash.com:3333", &cache);
    domain_from_host("stratum+tcp://mining.nicehash.com:3333", &cache);
    domain_from_host("pool.example.com", &cache);
    domain_from_host("pool.example.com", &cache);

    let writes = cache.writes.lock().unwrap();
    assert_eq!(writes.get("stratum+tcp://mining.nicehash.com:3333"), Some(&1));
    assert_eq!(writes.get("http://pool.example.com"), Some(&2));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_bare_host_served_from_scheme_key() {
    let cache = MemoryDomainCache::new();

    // The stored key for a bare host is its http:// form, so passing that form hits.
    assert_eq!(domain_from_host("pool.example.com", &cache), "example");
    cache.insert("http://pool.example.com".to_string(), "pinned".to_string());
    assert_eq!(domain_from_host("http://pool.example.com", &cache), "pinned");
}

#[test]
fn test_fallback_is_cached_too() {
    let cache = MemoryDomainCache::new();

    let label = domain_from_host(" stratum+tcp://[::1 ", &cache);

    assert_eq!(label, "stratum+tcp://[::1");
    assert_eq!(cache.get(" stratum+tcp://[::1 ").as_deref(), Some("stratum+tcp://[::1"));
}

#[test]
fn test_derive_domain_outcomes() {
    assert_eq!(
        derive_domain("mining.nicehash.com"),
        DomainDerivation::Parsed("nicehash".to_string())
    );
    assert!(matches!(
        derive_domain("stratum+tcp://[::1"),
        DomainDerivation::Fallback { .. }
    ));
}

#[test]
fn test_cache_shared_between_threads() {
    let cache = Arc::new(MemoryDomainCache::new());
    let hosts = [
        "stratum+tcp://us.pool.example.com:3333",
        "stratum+tcp://eu.pool.example.com:3333",
        "stratum+tcp://mining.nicehash.com:3333",
    ];

    let handles: Vec<_> = (0..12)
        .map(|i| {
            let cache = Arc::clone(&cache);
            let host = hosts[i % hosts.len()];
            thread::spawn(move || domain_from_host(host, cache.as_ref()))
        })
        .collect();

    let labels: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(cache.len(), hosts.len());
    assert_eq!(labels[0], "pool.example");
    assert_eq!(labels[2], "nicehash");
}
