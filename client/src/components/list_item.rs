//! A single row: checkbox, label, delete button.

#[cfg(test)]
#[path = "list_item_test.rs"]
mod list_item_test;

use leptos::prelude::*;

use crate::net::types::Item;

/// Renders one item. Both callbacks receive the item id.
///
/// `on_delete` only requests deletion; the page asks for confirmation
/// before anything is removed.
#[component]
pub fn ListItem(item: Item, on_check: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let Item { id, item: label, checked } = item;
    let check_id = id.clone();
    let delete_id = id;
    let aria_label = format!("Delete {label}");

    view! {
        <li class="item">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| on_check.run(check_id.clone())
            />
            <label class="item__label" class:item__label--checked=checked>
                {label}
            </label>
            <button
                class="item__delete"
                tabindex="0"
                aria-label=aria_label
                on:click=move |_| on_delete.run(delete_id.clone())
            >
                "🗑"
            </button>
        </li>
    }
}
