#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::{RecencyList, SlotId};
use std::collections::VecDeque;

// Heavy push / promote / remove load on the raw list, with a reference
// VecDeque of (id, value) kept in the same front-to-back order.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u8> = RecencyList::new();
    let mut reference: VecDeque<(SlotId, u8)> = VecDeque::new();

    for &byte in data {
        match byte % 4 {
            0 | 1 => {
                let id = list.push_front(byte);
                reference.push_front((id, byte));
            }
            2 => {
                if reference.is_empty() {
                    continue;
                }
                let pos = usize::from(byte) % reference.len();
                if let Some(entry) = reference.remove(pos) {
                    assert!(list.move_to_front(entry.0));
                    reference.push_front(entry);
                }
            }
            3 => {
                let expected = reference.pop_back().map(|(_, v)| v);
                assert_eq!(list.pop_back(), expected);
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), reference.len());
        assert_eq!(list.front_id(), reference.front().map(|&(id, _)| id));
        assert_eq!(list.back_id(), reference.back().map(|&(id, _)| id));
    }

    let values: Vec<u8> = list.iter().copied().collect();
    let expected: Vec<u8> = reference.iter().map(|&(_, v)| v).collect();
    assert_eq!(values, expected);
    assert!(list.check_links().is_ok());
});
