//! Local form and dialog state.
//!
//! DESIGN
//! ======
//! Keeps transient input text out of `ItemsState`. The page reads `search`
//! through its own memo, so add-box typing and dialog toggles never
//! re-filter or re-render the list.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Controlled-input values and the delete confirmation target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub search: String,
    pub new_item: String,
    /// Item id awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl UiState {
    /// Take the add-box text for submission, leaving the box empty.
    ///
    /// Returns `None` when the trimmed text is blank.
    pub fn take_new_item(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.new_item);
        let trimmed = text.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
    }
}
