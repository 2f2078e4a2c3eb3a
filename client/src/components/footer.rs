//! Footer with the total item count.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

/// `"1 List item"` / `"{n} List items"`.
pub fn item_count_label(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{count} List {noun}")
}

#[component]
pub fn Footer(count: Signal<usize>) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{move || item_count_label(count.get())}</p>
        </footer>
    }
}
