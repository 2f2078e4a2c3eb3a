//! Toast helpers used by request handlers.
//!
//! TRADE-OFFS
//! ==========
//! Auto-dismiss relies on a browser timer; SSR and tests leave the toast
//! queued, which is harmless since nothing pushes toasts off-browser.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Push a toast and schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, text: Option<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, title, text)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let duration = kind.duration_ms();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub fn notify_success(toasts: RwSignal<ToastState>, title: &str) {
    notify(toasts, ToastKind::Success, title, None);
}
