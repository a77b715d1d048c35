#![no_main]

use libfuzzer_sys::fuzz_target;
use lfucache::ds::IntrusiveList;

// Fuzz arbitrary operation sequences on IntrusiveList
//
// Mixes detached inserts with the splice primitives (append, insert_before,
// replace_in_place, unlink) so that unlinked-but-live nodes are exercised
// alongside ordinary push/pop traffic.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut all_ids = Vec::new();

    for chunk in data.chunks_exact(3) {
        let op = chunk[0] % 10;
        let a = chunk[1] as usize;
        let b = chunk[2] as usize;
        let value = u32::from(chunk[1]);

        let pick = |ids: &Vec<_>, n: usize| {
            if ids.is_empty() { None } else { Some(ids[n % ids.len()]) }
        };

        match op {
            0 => {
                let id = list.push_back(value);
                all_ids.push(id);
                assert_eq!(list.back_id(), Some(id));
            }
            1 => {
                let id = list.insert_detached(value);
                all_ids.push(id);
                assert!(list.contains(id));
                assert!(!list.is_linked(id));
            }
            2 => {
                if let Some(id) = pick(&all_ids, a) {
                    let was_detached = list.contains(id) && !list.is_linked(id);
                    let appended = list.append(id);
                    assert_eq!(appended, was_detached);
                    if appended {
                        assert_eq!(list.back_id(), Some(id));
                    }
                }
            }
            3 => {
                if let (Some(id), Some(anchor)) = (pick(&all_ids, a), pick(&all_ids, b)) {
                    let old_len = list.len();
                    if list.insert_before(id, anchor) {
                        assert_eq!(list.next_id(id), Some(anchor));
                        assert_eq!(list.len(), old_len + 1);
                    }
                }
            }
            4 => {
                if let Some(id) = pick(&all_ids, a) {
                    let old_len = list.len();
                    if list.unlink(id) {
                        assert_eq!(list.len(), old_len - 1);
                        assert!(list.contains(id));
                    }
                }
            }
            5 => {
                if let (Some(id), Some(old)) = (pick(&all_ids, a), pick(&all_ids, b)) {
                    let old_len = list.len();
                    if list.replace_in_place(id, old) {
                        assert!(list.is_linked(id));
                        assert_eq!(list.len(), old_len + 1);
                    }
                }
            }
            6 => {
                if let Some(id) = pick(&all_ids, a) {
                    let old_len = list.len();
                    let was_linked = list.is_linked(id);
                    if list.remove(id).is_some() {
                        assert!(!list.contains(id));
                        let expected = if was_linked { old_len - 1 } else { old_len };
                        assert_eq!(list.len(), expected);
                    }
                }
            }
            7 => {
                let old_len = list.len();
                match list.pop_back() {
                    Some((id, _)) => {
                        assert_eq!(list.len(), old_len - 1);
                        assert!(!list.contains(id));
                    }
                    None => assert_eq!(old_len, 0),
                }
            }
            8 => {
                let forward: Vec<_> = list.iter_ids().collect();
                assert_eq!(forward.len(), list.len());
                assert_eq!(list.iter().count(), list.len());
            }
            9 => {
                list.clear();
                all_ids.clear();
                assert!(list.is_empty());
                assert_eq!(list.front(), None);
                assert_eq!(list.back(), None);
            }
            _ => unreachable!(),
        }

        list.debug_validate_invariants();
    }
});
