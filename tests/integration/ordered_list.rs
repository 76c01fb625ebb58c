//! Integration tests for the ordered context list: append, remove, move, and
//! clear as a caller drives them through the public API.

use weaver::context::{ContextEntry, IncludeType, OrderedContextList, SharedContextList};
use weaver::error::ListError;
use weaver::types::{DisplayPosition, StorageIndex};

fn display_paths(list: &OrderedContextList) -> Vec<String> {
    list.sorted()
        .into_iter()
        .map(|(_, entry)| entry.path.clone())
        .collect()
}

fn orders(list: &OrderedContextList) -> Vec<usize> {
    let mut orders: Vec<usize> = list.entries().iter().map(|e| e.order).collect();
    orders.sort_unstable();
    orders
}

fn index_of(list: &OrderedContextList, path: &str) -> StorageIndex {
    list.storage_index_of(path).unwrap()
}

#[test]
fn test_end_to_end_append_move_remove() {
    let mut list = OrderedContextList::new();
    assert!(list.append("a.txt", IncludeType::Full));
    assert!(list.append("b.txt", IncludeType::Full));
    assert!(list.append("c.txt", IncludeType::Full));
    assert_eq!(orders(&list), vec![0, 1, 2]);

    list.move_to_position(StorageIndex(2), DisplayPosition(0)).unwrap();
    let order_of = |list: &OrderedContextList, path: &str| {
        list.get(index_of(list, path)).unwrap().order
    };
    assert_eq!(order_of(&list, "c.txt"), 0);
    assert_eq!(order_of(&list, "a.txt"), 1);
    assert_eq!(order_of(&list, "b.txt"), 2);

    let a = index_of(&list, "a.txt");
    let removed = list.remove_at(a).unwrap();
    assert_eq!(removed.path, "a.txt");
    assert_eq!(display_paths(&list), vec!["c.txt", "b.txt"]);
    assert_eq!(orders(&list), vec![0, 1]);
}

#[test]
fn test_move_to_front_then_to_end() {
    let mut list = OrderedContextList::new();
    for path in ["A", "B", "C", "D"] {
        list.append(path, IncludeType::Full);
    }

    list.move_to_position(index_of(&list, "B"), DisplayPosition(0))
        .unwrap();
    assert_eq!(display_paths(&list), vec!["B", "A", "C", "D"]);

    list.move_to_position(index_of(&list, "A"), DisplayPosition(4))
        .unwrap();
    assert_eq!(display_paths(&list), vec!["B", "C", "D", "A"]);
    assert_eq!(orders(&list), vec![0, 1, 2, 3]);
}

#[test]
fn test_drop_zones_adjacent_to_entry_are_no_ops() {
    let mut list = OrderedContextList::new();
    for path in ["A", "B", "C", "D"] {
        list.append(path, IncludeType::Full);
    }
    list.move_to_position(StorageIndex(3), DisplayPosition(1))
        .unwrap();
    let before = list.clone();

    // "D" now sits at display index 1: zones 1 and 2 both surround it.
    let d = index_of(&list, "D");
    list.move_to_position(d, DisplayPosition(1)).unwrap();
    assert_eq!(list, before);
    list.move_to_position(d, DisplayPosition(2)).unwrap();
    assert_eq!(list, before);
}

#[test]
fn test_duplicate_append_is_ignored() {
    let mut list = OrderedContextList::new();
    assert!(list.append("notes.md", IncludeType::Full));
    assert!(!list.append(
        "notes.md",
        IncludeType::Lines { start: 1, end: 4 }
    ));
    assert_eq!(list.len(), 1);
    assert_eq!(list.entries()[0].include_type, IncludeType::Full);
}

#[test]
fn test_out_of_bounds_operations_leave_list_untouched() {
    let mut list = OrderedContextList::new();
    list.append("a.txt", IncludeType::Full);
    list.append("b.txt", IncludeType::Full);
    let before = list.clone();

    assert_eq!(
        list.remove_at(StorageIndex(2)).unwrap_err(),
        ListError::StorageIndexOutOfBounds { index: 2, len: 2 }
    );
    assert_eq!(
        list.move_to_position(StorageIndex(5), DisplayPosition(0))
            .unwrap_err(),
        ListError::StorageIndexOutOfBounds { index: 5, len: 2 }
    );
    assert_eq!(
        list.move_to_position(StorageIndex(0), DisplayPosition(3))
            .unwrap_err(),
        ListError::DisplayPositionOutOfBounds {
            position: 3,
            len: 2
        }
    );
    assert_eq!(list, before);
}

#[test]
fn test_clear_then_append_starts_from_zero() {
    let mut list = OrderedContextList::new();
    list.append("a.txt", IncludeType::Full);
    list.append("b.txt", IncludeType::Full);
    list.clear();
    assert!(list.is_empty());

    list.append("c.txt", IncludeType::Full);
    assert_eq!(list.entries()[0].order, 0);
}

#[test]
fn test_include_type_passes_through_reordering() {
    let mut list = OrderedContextList::new();
    list.append(
        "intro.md",
        IncludeType::Section {
            section: "Setting".to_string(),
        },
    );
    list.append("body.md", IncludeType::Lines { start: 10, end: 20 });
    list.move_to_position(StorageIndex(1), DisplayPosition(0))
        .unwrap();

    let entries = list.to_ordered_vec();
    assert_eq!(entries[0].path, "body.md");
    assert_eq!(entries[0].include_type, IncludeType::Lines { start: 10, end: 20 });
    assert_eq!(
        entries[1].include_type,
        IncludeType::Section {
            section: "Setting".to_string()
        }
    );
}

#[test]
fn test_json_round_trip_keeps_display_sequence() {
    let mut list = OrderedContextList::new();
    for path in ["one", "two", "three"] {
        list.append(path, IncludeType::Full);
    }
    list.move_to_position(StorageIndex(0), DisplayPosition(3))
        .unwrap();

    let json = serde_json::to_string(&list).unwrap();
    let restored: OrderedContextList = serde_json::from_str(&json).unwrap();
    assert_eq!(display_paths(&restored), display_paths(&list));
}

#[test]
fn test_entries_from_backend_are_repaired() {
    let list = OrderedContextList::from_entries(vec![
        ContextEntry::new("late", IncludeType::Full, 9),
        ContextEntry::new("early", IncludeType::Full, 2),
        ContextEntry::new("early", IncludeType::Full, 4),
    ]);
    assert_eq!(display_paths(&list), vec!["early", "late"]);
    assert_eq!(orders(&list), vec![0, 1]);
}

#[test]
fn test_shared_list_serializes_moves_across_threads() {
    let shared = SharedContextList::new(OrderedContextList::new());
    for i in 0..8 {
        shared.append(format!("file-{}.md", i), IncludeType::Full);
    }

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = shared.clone();
            std::thread::spawn(move || {
                for i in 0..25 {
                    let source = StorageIndex((t + i) % 8);
                    let target = DisplayPosition((t * 3 + i) % 9);
                    shared.move_to_position(source, target).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = shared.snapshot();
    assert_eq!(orders(&snapshot), (0..8).collect::<Vec<_>>());
}
