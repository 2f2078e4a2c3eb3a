//! Controlled form for adding a new item.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Text input bound to `UiState::new_item` plus a submit button.
///
/// Submission is delegated to `on_submit`; the form's default navigation is
/// always suppressed.
#[component]
pub fn AddItem(on_submit: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                log::debug!("add item input focus failed: {e:?}");
            }
        }
    };

    view! {
        <form class="add-form" on:submit=submit>
            <label class="visually-hidden" for="addItem">
                "Add Item"
            </label>
            <input
                node_ref=input_ref
                id="addItem"
                class="add-form__input"
                type="text"
                placeholder="Add Item"
                autofocus
                required
                prop:value=move || ui.with(|u| u.new_item.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ui.update(|u| u.new_item = value);
                }
            />
            <button class="btn add-form__submit" type="submit" aria-label="Add Item">
                "+"
            </button>
        </form>
    }
}
