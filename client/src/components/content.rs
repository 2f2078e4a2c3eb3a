//! List body: either the filtered rows or an empty-list message.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;

use super::list_item::ListItem;
use crate::net::types::Item;

#[component]
pub fn Content(items: Signal<Vec<Item>>, on_check: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    view! {
        <Show
            when=move || !items.with(Vec::is_empty)
            fallback=|| view! { <p class="content__empty">"Your list is empty."</p> }
        >
            <ul class="content__list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|item| view! { <ListItem item=item on_check=on_check on_delete=on_delete/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
