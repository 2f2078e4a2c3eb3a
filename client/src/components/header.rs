//! Page header with the list title.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__title">{title}</h1>
        </header>
    }
}
