//! Grocery list contents mirrored from the REST collaborator.
//!
//! DESIGN
//! ======
//! Mutations here are purely local. The page applies them optimistically
//! and fires the matching request separately, so this model never knows
//! whether the remote store agrees.

#[cfg(test)]
#[path = "items_test.rs"]
mod items_test;

use crate::net::types::Item;

/// Items plus the status of the initial fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemsState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl ItemsState {
    /// Apply the outcome of the initial fetch.
    pub fn finish_load(&mut self, result: Result<Vec<Item>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Flip `checked` on the matching item and return its previous value.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        let previous = item.checked;
        item.checked = !previous;
        Some(previous)
    }

    /// Remove the matching item, keeping the others in order.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Items whose label contains `search`, ignoring case.
    pub fn filtered(&self, search: &str) -> Vec<Item> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.item.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Whether the list (rather than loading or error output) should render.
    pub fn show_list(&self) -> bool {
        !self.loading && self.error.is_none()
    }

    /// Id for a new item created at `now_ms`, bumped past any local collision.
    pub fn next_item_id(&self, now_ms: u64) -> String {
        let mut candidate = now_ms;
        loop {
            let id = candidate.to_string();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
            candidate += 1;
        }
    }
}
