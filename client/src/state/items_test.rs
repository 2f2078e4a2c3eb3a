use super::*;

fn sample() -> ItemsState {
    ItemsState {
        items: vec![
            Item { id: "1".to_owned(), item: "Almonds".to_owned(), checked: true },
            Item { id: "2".to_owned(), item: "Pizza".to_owned(), checked: false },
            Item { id: "3".to_owned(), item: "Bag of unsalted almonds".to_owned(), checked: false },
        ],
        loading: false,
        error: None,
    }
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

// =============================================================
// Defaults and loading
// =============================================================

#[test]
fn default_is_loading_and_empty() {
    let state = ItemsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(state.error.is_none());
    assert!(!state.show_list());
}

#[test]
fn finish_load_ok_replaces_items() {
    let mut state = ItemsState::default();
    state.finish_load(Ok(vec![Item::new("9", "Milk")]));
    assert!(!state.loading);
    assert_eq!(ids(&state.items), vec!["9"]);
    assert!(state.show_list());
}

#[test]
fn finish_load_err_records_message() {
    let mut state = ItemsState::default();
    state.finish_load(Err("Network request failed: boom".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Network request failed: boom"));
    assert!(!state.show_list());
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn push_appends_in_insertion_order() {
    let mut state = sample();
    state.push(Item::new("4", "Eggs"));
    assert_eq!(ids(&state.items), vec!["1", "2", "3", "4"]);
}

#[test]
fn toggle_flips_and_returns_previous() {
    let mut state = sample();
    assert_eq!(state.toggle("2"), Some(false));
    assert!(state.items[1].checked);
    assert_eq!(state.toggle("2"), Some(true));
    assert!(!state.items[1].checked);
}

#[test]
fn toggle_unknown_id_is_none() {
    let mut state = sample();
    assert_eq!(state.toggle("missing"), None);
    assert_eq!(state, sample());
}

#[test]
fn remove_drops_only_target() {
    let mut state = sample();
    let removed = state.remove("2").unwrap();
    assert_eq!(removed.item, "Pizza");
    assert_eq!(ids(&state.items), vec!["1", "3"]);
}

#[test]
fn remove_unknown_id_is_none() {
    let mut state = sample();
    assert!(state.remove("missing").is_none());
    assert_eq!(state.items.len(), 3);
}

// =============================================================
// Search
// =============================================================

#[test]
fn filtered_empty_search_returns_all() {
    assert_eq!(ids(&sample().filtered("")), vec!["1", "2", "3"]);
}

#[test]
fn filtered_is_case_insensitive_substring() {
    assert_eq!(ids(&sample().filtered("ALMOND")), vec!["1", "3"]);
    assert_eq!(ids(&sample().filtered("zz")), vec!["2"]);
}

#[test]
fn filtered_no_match_is_empty() {
    assert!(sample().filtered("coffee").is_empty());
}

// =============================================================
// Id generation
// =============================================================

#[test]
fn next_item_id_uses_timestamp() {
    assert_eq!(sample().next_item_id(1_700_000_000_000), "1700000000000");
}

#[test]
fn next_item_id_skips_existing_ids() {
    let mut state = ItemsState::default();
    state.push(Item::new("100", "a"));
    state.push(Item::new("101", "b"));
    assert_eq!(state.next_item_id(100), "102");
}
