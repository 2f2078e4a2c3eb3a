//! The grocery list page: initial load plus add/check/search/delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns every network call; components below it
//! just report intent. Local state is updated optimistically for check and
//! delete, and only after a successful response for add.
//!
//! ERROR HANDLING
//! ==============
//! Failures stop at the handler that spawned the request. The initial load
//! surfaces its error inline, delete raises an error toast, and add/check
//! only log. Nothing is rolled back or retried.

#[cfg(test)]
#[path = "grocery_test.rs"]
mod grocery_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::add_item::AddItem;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::content::Content;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::loading::Loading;
use crate::components::search_item::SearchItem;
use crate::components::toast_stack::ToastStack;
use crate::config::ApiConfig;
use crate::net::api::{self, ApiError};
use crate::net::types::Item;
use crate::state::items::ItemsState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::notify::{notify, notify_success};

/// Delay before the first `GET /items`, so the loading indicator is visible.
pub const INITIAL_LOAD_DELAY_MS: u32 = 800;

pub const PAGE_TITLE: &str = "Grocery List";

#[component]
pub fn GroceryPage() -> impl IntoView {
    let items = expect_context::<RwSignal<ItemsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ApiConfig>();

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(INITIAL_LOAD_DELAY_MS).await;
            load_items(&config, items).await;
        });
    }

    let on_add = Callback::new({
        let config = config.clone();
        move |()| {
            let Some(label) = ui.try_update(UiState::take_new_item).flatten() else {
                return;
            };
            let item = items.with_untracked(|s| build_new_item(s, label, now_ms()));
            let config = config.clone();
            spawn_local(async move {
                let result = api::create_item(&config, &item).await;
                items.update(|s| apply_add_result(s, item, result));
            });
        }
    });

    let on_check = Callback::new({
        let config = config.clone();
        move |id: String| {
            let Some(checked) = items.try_update(|s| begin_check(s, &id)).flatten() else {
                log::warn!("check ignored for unknown item {id}");
                return;
            };
            let config = config.clone();
            spawn_local(async move {
                match api::set_item_checked(&config, &id, checked).await {
                    Ok(()) => notify_success(toasts, "Success"),
                    Err(e) => log::error!("check item {id} failed: {e}"),
                }
            });
        }
    });

    let on_delete_request = Callback::new(move |id: String| ui.update(|u| u.pending_delete = Some(id)));
    let on_delete_cancel = Callback::new(move |()| ui.update(cancel_delete));

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = ui.try_update(|u| items.try_update(|s| begin_delete(u, s)).flatten()).flatten() else {
            return;
        };
        let config = config.clone();
        spawn_local(async move {
            let result = api::delete_item(&config, &id).await;
            if let Err(e) = &result {
                log::error!("delete item {id} failed: {e}");
            }
            let (kind, title, text) = delete_feedback(&result);
            notify(toasts, kind, title, text);
        });
    });

    let search = search_text(ui);
    let visible = Memo::new(move |_| search.with(|needle| items.with(|s| s.filtered(needle))));
    let count = Memo::new(move |_| items.with(|s| s.items.len()));

    view! {
        <div class="app">
            <Header title=PAGE_TITLE/>
            <AddItem on_submit=on_add/>
            <SearchItem/>
            <main class="main">
                <Show when=move || items.with(|s| s.loading)>
                    <Loading/>
                </Show>
                <Show when=move || items.with(|s| s.error.is_some())>
                    <p class="main__error">{move || items.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show when=move || items.with(ItemsState::show_list)>
                    <Content items=Signal::from(visible) on_check=on_check on_delete=on_delete_request/>
                </Show>
            </main>
            <Footer count=Signal::from(count)/>
            <Show when=move || ui.with(|u| u.pending_delete.is_some())>
                <ConfirmDialog
                    title="Are you sure?"
                    text="You won't be able to revert this!"
                    confirm_label="Yes, delete it!"
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
            <ToastStack/>
        </div>
    }
}

/// Fetch the list and record the outcome in `items`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
async fn load_items(config: &ApiConfig, items: RwSignal<ItemsState>) {
    let result = api::fetch_items(config).await;
    match &result {
        Ok(list) => log::debug!("loaded {} items", list.len()),
        Err(e) => log::error!("Fetching error: {e}"),
    }
    items.update(|s| s.finish_load(result.map_err(|e| e.to_string())));
}

/// Unchecked item with a locally unique timestamp id.
fn build_new_item(items: &ItemsState, label: String, now_ms: u64) -> Item {
    Item::new(items.next_item_id(now_ms), label)
}

/// Search text as its own memo, so edits to other `UiState` fields do not
/// invalidate anything downstream of it.
fn search_text(ui: RwSignal<UiState>) -> Memo<String> {
    Memo::new(move |_| ui.with(|u| u.search.clone()))
}

/// Append `item` once the create request succeeded; a failure leaves the
/// list untouched.
fn apply_add_result(items: &mut ItemsState, item: Item, result: Result<(), ApiError>) {
    match result {
        Ok(()) => items.push(item),
        Err(e) => log::error!("add item {} failed: {e}", item.id),
    }
}

/// Flip the item locally and return the value to send in the PATCH body.
fn begin_check(items: &mut ItemsState, id: &str) -> Option<bool> {
    items.toggle(id).map(|previous| !previous)
}

/// Take the confirmed delete target and drop it from the local list.
fn begin_delete(ui: &mut UiState, items: &mut ItemsState) -> Option<String> {
    let id = ui.pending_delete.take()?;
    items.remove(&id);
    Some(id)
}

fn cancel_delete(ui: &mut UiState) {
    ui.pending_delete = None;
}

/// Toast shown once the delete request settles.
fn delete_feedback(result: &Result<(), ApiError>) -> (ToastKind, &'static str, Option<String>) {
    match result {
        Ok(()) => (ToastKind::Success, "Your work has been saved", None),
        Err(e) => (ToastKind::Error, "Error", Some(e.detail())),
    }
}
