use lrukit::LruCache;

fn main() {
    let mut cache: LruCache<u32, String> = match LruCache::new(2) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("invalid cache configuration: {err}");
            return;
        },
    };

    cache.insert(1, "alpha".to_string());
    cache.insert(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value.as_str());
    }

    cache.insert(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));

    let order: Vec<_> = cache.keys().copied().collect();
    println!("recency order (MRU first): {:?}", order);
}

// Expected output:
// hit 1: alpha
// contains 2? false
// recency order (MRU first): [3, 1]
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Inserting key 3 evicts key 2, so contains(2) is false.
