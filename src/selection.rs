//! Item Selection
//!
//! Remove-mode bookkeeping for the item rows of one open schema form.
//!
//! Selection is positional: `selected` holds row indices into the current
//! item list, not item ids. Structural edits and row toggles go through the
//! same `&mut` editor, so indices always refer to the list as it is now.

use std::collections::BTreeSet;

use crate::models::{next_sequence_id, Item};

/// Tri-state of the "select all" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Partial,
    All,
}

/// Remove mode flag plus the rows marked for batch removal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSelection {
    remove_mode_active: bool,
    selected: BTreeSet<usize>,
}

impl ItemSelection {
    pub fn remove_mode_active(&self) -> bool {
        self.remove_mode_active
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Flip remove mode. Leaving it with rows checked removes those rows
    /// from `items`; returns how many were removed.
    pub fn toggle_remove_mode(&mut self, items: &mut Vec<Item>) -> usize {
        let mut removed = 0;
        if self.remove_mode_active && !self.selected.is_empty() {
            let before = items.len();
            let mut index = 0;
            items.retain(|_| {
                let keep = !self.selected.contains(&index);
                index += 1;
                keep
            });
            removed = before - items.len();
            self.selected.clear();
            log::debug!("removed {} item rows", removed);
        }
        self.remove_mode_active = !self.remove_mode_active;
        removed
    }

    /// Ignored while remove mode is off
    pub fn toggle_row(&mut self, index: usize) {
        if !self.remove_mode_active {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn toggle_all(&mut self, item_count: usize) {
        if self.selected.len() == item_count {
            self.selected.clear();
        } else {
            self.selected = (0..item_count).collect();
        }
    }

    pub fn is_all_selected(&self, item_count: usize) -> bool {
        item_count > 0 && self.selected.len() == item_count
    }

    pub fn select_all_state(&self, item_count: usize) -> SelectAllState {
        if self.is_all_selected(item_count) {
            SelectAllState::All
        } else if self.selected.is_empty() {
            SelectAllState::None
        } else {
            SelectAllState::Partial
        }
    }
}

/// Editable item field of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Quantity,
    Time,
}

/// The item list of an open form together with its selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRowsEditor {
    items: Vec<Item>,
    selection: ItemSelection,
    /// Highest item id handed out in this session
    last_seq: u64,
}

impl Default for ItemRowsEditor {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ItemRowsEditor {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            selection: ItemSelection::default(),
            last_seq: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selection(&self) -> &ItemSelection {
        &self.selection
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Append an empty row with a fresh id; the selection is untouched
    pub fn add_row(&mut self) -> &Item {
        let next = next_sequence_id(self.items.iter().map(|item| item.id.as_str()), self.last_seq);
        self.last_seq = self.last_seq.max(next);
        self.items.push(Item::empty(next.to_string()));
        &self.items[self.items.len() - 1]
    }

    pub fn set_field(&mut self, index: usize, field: ItemField, value: String) {
        if let Some(item) = self.items.get_mut(index) {
            match field {
                ItemField::Name => item.name = value,
                ItemField::Quantity => item.quantity = value,
                ItemField::Time => item.time = value,
            }
        }
    }

    pub fn toggle_remove_mode(&mut self) -> usize {
        self.selection.toggle_remove_mode(&mut self.items)
    }

    /// Out-of-range indices are ignored
    pub fn toggle_row(&mut self, index: usize) {
        if index < self.items.len() {
            self.selection.toggle_row(index);
        }
    }

    pub fn toggle_all(&mut self) {
        self.selection.toggle_all(self.items.len());
    }

    pub fn is_all_selected(&self) -> bool {
        self.selection.is_all_selected(self.items.len())
    }

    pub fn select_all_state(&self) -> SelectAllState {
        self.selection.select_all_state(self.items.len())
    }
}
