//! Animated "Loading..." indicator shown during the initial fetch.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-container" role="status">
            <span class="loading-text">"Loading"</span>
            <span class="dot dot1">"."</span>
            <span class="dot dot2">"."</span>
            <span class="dot dot3">"."</span>
        </div>
    }
}
