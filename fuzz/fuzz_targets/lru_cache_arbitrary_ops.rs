#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::LruCache;
use std::collections::VecDeque;

// Arbitrary operation sequences against a VecDeque model (front = MRU).
//
// Byte 0 picks the capacity; every following pair of bytes is (op, key).
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap_byte % 32) + 1;
    let mut cache: LruCache<u8, u32> = match LruCache::new(capacity) {
        Ok(cache) => cache,
        Err(_) => return,
    };
    let mut model: VecDeque<(u8, u32)> = VecDeque::new();

    for (step, pair) in rest.chunks_exact(2).enumerate() {
        let (op, key) = (pair[0], pair[1] % 64);
        let value = step as u32;
        let pos = model.iter().position(|&(k, _)| k == key);

        match op % 6 {
            0 | 1 => {
                let expected = match pos {
                    Some(pos) => model.remove(pos).map(|(_, v)| v),
                    None => {
                        if model.len() == capacity {
                            model.pop_back();
                        }
                        None
                    }
                };
                model.push_front((key, value));
                assert_eq!(cache.insert(key, value), expected);
            }
            2 => {
                let expected = pos.and_then(|pos| model.remove(pos)).map(|entry| {
                    model.push_front(entry);
                    entry.1
                });
                assert_eq!(cache.get(&key).copied(), expected);
            }
            3 => {
                assert_eq!(cache.contains(&key), pos.is_some());
            }
            4 => {
                let expected = pos.and_then(|pos| model.remove(pos)).map(|(_, v)| v);
                assert_eq!(cache.remove(&key), expected);
            }
            5 => {
                assert_eq!(cache.pop_lru(), model.pop_back());
            }
            _ => unreachable!(),
        }

        assert_eq!(cache.len(), model.len());
        assert!(cache.len() <= capacity);
    }

    let actual: Vec<(u8, u32)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
    let expected: Vec<(u8, u32)> = model.into_iter().collect();
    assert_eq!(actual, expected);
    assert!(cache.check_invariants().is_ok());
});
