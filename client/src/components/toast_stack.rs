//! Top-right stack of transient notifications.

use leptos::prelude::*;

use crate::state::toast::ToastState;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.css_class() role="status">
                                <strong class="toast__title">{toast.title}</strong>
                                {toast.text.map(|text| view! { <span class="toast__text">{text}</span> })}
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
