//! UI component modules for the grocery page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they read shared state from context or
//! props and report user intent through callbacks. Network calls live in
//! the page, never here.

pub mod add_item;
pub mod confirm_dialog;
pub mod content;
pub mod footer;
pub mod header;
pub mod list_item;
pub mod loading;
pub mod search_item;
pub mod toast_stack;
