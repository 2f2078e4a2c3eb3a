#![cfg(not(feature = "hydrate"))]

use super::*;

fn render(item: Item) -> String {
    Owner::new().with(|| {
        let noop = Callback::new(|_: String| {});
        view! { <ListItem item=item on_check=noop on_delete=noop/> }.to_html()
    })
}

#[test]
fn delete_button_is_labelled_with_item() {
    let html = render(Item::new("1", "Milk"));
    assert!(html.contains(r#"aria-label="Delete Milk""#), "{html}");
}

#[test]
fn checked_label_is_struck_through() {
    let html = render(Item { id: "1".to_owned(), item: "Milk".to_owned(), checked: true });
    assert!(html.contains("item__label--checked"), "{html}");
}

#[test]
fn unchecked_label_is_plain() {
    let html = render(Item::new("1", "Milk"));
    assert!(!html.contains("item__label--checked"), "{html}");
}
