//! Base URL of the grocery REST collaborator.
//!
//! The host server writes the URL into a `<meta name="grocery-api-base">`
//! tag in the SSR shell; the browser reads it back at startup. Builds that
//! run without that tag fall back to the compile-time
//! `GROCERY_API_BASE_URL` or the local json-server default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "grocery-api-base";

/// Used when neither the shell nor the build supplies a base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3500";

/// Resolved REST endpoint configuration, shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self { base_url: normalize_base_url(base_url.as_ref()) }
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the shell's meta tag, falling back to [`build_default`](Self::build_default).
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"))
                .filter(|v| !v.trim().is_empty());
            if let Some(content) = content {
                return Self::new(content);
            }
        }
        Self::build_default()
    }

    /// Compile-time `GROCERY_API_BASE_URL` or [`DEFAULT_API_BASE_URL`].
    pub fn build_default() -> Self {
        Self::new(option_env!("GROCERY_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::build_default()
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
