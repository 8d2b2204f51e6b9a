// ==============================================
// LRU BEHAVIOUR SCENARIOS (integration)
// ==============================================
//
// End-to-end sequences against the public API: the fixed scenarios the cache
// is expected to reproduce exactly, plus the general recency properties.

use lrukit::LruCache;

fn keys(cache: &LruCache<String, String>) -> Vec<String> {
    cache.keys().cloned().collect()
}

fn value(i: usize) -> String {
    format!("value: {i}")
}

// ==============================================
// Fixed scenarios
// ==============================================

#[test]
fn capacity_one_second_insert_replaces_first() {
    let mut cache = LruCache::new(1).unwrap();
    cache.insert("hello".to_string(), "world".to_string());
    cache.insert("hello2".to_string(), "world2".to_string());

    assert!(!cache.contains(&"hello".to_string()));
    assert!(cache.contains(&"hello2".to_string()));
    assert_eq!(cache.get(&"hello".to_string()), None);
    assert_eq!(cache.get(&"hello2".to_string()), Some(&"world2".to_string()));
    assert_eq!(cache.try_get(&"hello".to_string()), (false, None));
    cache.check_invariants().unwrap();
}

#[test]
fn capacity_two_lookup_redirects_eviction() {
    let mut cache = LruCache::new(2).unwrap();
    let (k1, k2, k3) = ("hello", "hello2", "another key");

    cache.insert(k1, "world");
    cache.insert(k2, "world2");
    assert!(cache.contains(&k1));
    assert!(cache.contains(&k2));

    assert_eq!(cache.try_get(&k1), (true, Some(&"world")));

    cache.insert(k3, "another value");
    assert!(cache.contains(&k1));
    assert!(!cache.contains(&k2));
    assert!(cache.contains(&k3));
    assert_eq!(cache.get(&k1), Some(&"world"));
    assert_eq!(cache.get(&k2), None);
    assert_eq!(cache.get(&k3), Some(&"another value"));
}

#[test]
fn capacity_five_eviction_order_skips_promoted_key() {
    let capacity = 5;
    let mut cache = LruCache::new(capacity).unwrap();
    for i in 0..capacity {
        cache.insert(i.to_string(), value(i));
    }

    cache.get(&"3".to_string());
    assert_eq!(keys(&cache), ["3", "4", "2", "1", "0"]);

    // Each overflow insert evicts the current tail; record it step by step.
    let mut evicted = Vec::new();
    for i in capacity..capacity + 4 {
        let victim = cache.peek_lru().map(|(k, _)| k.clone()).unwrap();
        cache.insert(i.to_string(), value(i));
        assert!(!cache.contains(&victim));
        assert_eq!(cache.len(), capacity);
        evicted.push(victim);
    }
    assert_eq!(evicted, ["0", "1", "2", "4"]);
    assert_eq!(keys(&cache), ["8", "7", "6", "5", "3"]);

    for gone in ["0", "1", "2", "4"] {
        assert!(!cache.contains(&gone.to_string()));
        assert_eq!(cache.get(&gone.to_string()), None);
    }
    for _ in 0..4 {
        assert_eq!(cache.get(&"3".to_string()), Some(&value(3)));
    }
    assert_eq!(cache.get(&"6".to_string()), Some(&value(6)));

    cache.insert("6".to_string(), value(6));
    assert_eq!(cache.get(&"6".to_string()), Some(&value(6)));
    assert_eq!(cache.len(), capacity);
    cache.check_invariants().unwrap();
}

// ==============================================
// General properties
// ==============================================

#[test]
fn recency_list_is_reverse_insertion_order() {
    let mut cache = LruCache::new(8).unwrap();
    let inserted: Vec<String> = (0..6).map(|i| format!("k{i}")).collect();
    for k in &inserted {
        cache.insert(k.clone(), k.to_uppercase());
    }
    let expected: Vec<String> = inserted.iter().rev().cloned().collect();
    assert_eq!(keys(&cache), expected);
}

#[test]
fn lookup_of_least_recent_evicts_second_least_recent() {
    for capacity in 2..10usize {
        let mut cache = LruCache::new(capacity).unwrap();
        for i in 0..capacity {
            cache.insert(i, i);
        }
        cache.get(&0);
        cache.insert(capacity, capacity);

        assert!(cache.contains(&0), "capacity {capacity}");
        assert!(!cache.contains(&1), "capacity {capacity}");
    }
}

#[test]
fn absent_and_evicted_keys_look_identical() {
    let mut cache = LruCache::new(2).unwrap();
    cache.insert(1, "a");
    cache.insert(2, "b");
    cache.insert(3, "c");

    for key in [1, 42] {
        assert_eq!(cache.get(&key), None);
        assert!(!cache.contains(&key));
    }
}

#[test]
fn reinsert_keeps_count_and_latest_value() {
    let mut cache = LruCache::new(3).unwrap();
    cache.insert("k", 1);
    cache.insert("other", 0);
    let before = cache.len();
    cache.insert("k", 2);

    assert_eq!(cache.len(), before);
    assert_eq!(cache.get(&"k"), Some(&2));
}

#[test]
fn contains_never_changes_victim() {
    let mut cache = LruCache::new(3).unwrap();
    cache.extend([(1, ()), (2, ()), (3, ())]);
    for _ in 0..10 {
        assert!(cache.contains(&1));
    }
    cache.insert(4, ());
    assert!(!cache.contains(&1));
}

#[test]
fn long_churn_keeps_structures_in_sync() {
    let mut cache = LruCache::new(16).unwrap();
    for i in 0u64..5_000 {
        let key = (i * 7919) % 61;
        if i % 3 == 0 {
            cache.get(&key);
        } else if i % 11 == 0 {
            cache.remove(&key);
        } else {
            cache.insert(key, i);
        }
        assert!(cache.len() <= 16);
    }
    cache.check_invariants().unwrap();
}
