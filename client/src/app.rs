//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META, ApiConfig};
use crate::pages::grocery::{GroceryPage, PAGE_TITLE};
use crate::state::{items::ItemsState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base_url` is written into a `<meta>` tag the browser reads back
/// through [`ApiConfig::from_document`].
pub fn shell(options: LeptosOptions, api_base_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_document());
    provide_context(RwSignal::new(ItemsState::default()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/grocery-list.css"/>
        <Title text=PAGE_TITLE/>
        <Meta name="description" content="A simple grocery list"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GroceryPage/>
            </Routes>
        </Router>
    }
}
