use super::*;

#[test]
fn item_count_label_singular() {
    assert_eq!(item_count_label(1), "1 List item");
}

#[test]
fn item_count_label_plural() {
    assert_eq!(item_count_label(0), "0 List items");
    assert_eq!(item_count_label(12), "12 List items");
}
