//! Search box that filters the visible list.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn SearchItem() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <form class="search-form" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            <label class="visually-hidden" for="search">
                "Search"
            </label>
            <input
                id="search"
                class="search-form__input"
                type="text"
                role="searchbox"
                placeholder="Search Items"
                prop:value=move || ui.with(|u| u.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|u| u.search = value);
                }
            />
        </form>
    }
}
