//! UI Mode State Machine
//!
//! Tracks the global workflow (show/add/edit/delete) and which schema, if
//! any, that workflow targets. Transitions are total: every input is
//! accepted in every state.

use serde::{Deserialize, Serialize};

use crate::models::SchemaId;

/// Top-level workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiMode {
    #[default]
    Show,
    Add,
    Edit,
    Delete,
}

/// Category buttons that turn themselves off when clicked again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryButton {
    Edit,
    Delete,
}

impl From<CategoryButton> for UiMode {
    fn from(button: CategoryButton) -> Self {
        match button {
            CategoryButton::Edit => UiMode::Edit,
            CategoryButton::Delete => UiMode::Delete,
        }
    }
}

/// Mode plus the active schema reference.
///
/// `(Edit, None)` means edit mode is armed but no schema is chosen yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeState {
    pub mode: UiMode,
    pub active_id: Option<SchemaId>,
}

/// Flags derived from [`ModeState`]; never stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewFlags {
    pub is_add_active: bool,
    pub is_edit_active: bool,
    pub is_delete_active: bool,
    pub is_showing_detail: bool,
    pub is_add_disabled: bool,
    pub is_edit_disabled: bool,
    pub is_delete_disabled: bool,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: UiMode) {
        log::debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Changes the target only; the mode is left alone
    pub fn select_schema(&mut self, id: Option<SchemaId>) {
        log::debug!("active schema {:?} -> {:?}", self.active_id, id);
        self.active_id = id;
    }

    /// Clicking the active category again drops back to `Show`, but only
    /// while no schema is targeted. With a target the click re-sets the
    /// same mode.
    pub fn toggle_category_button(&mut self, target: CategoryButton) {
        let target = UiMode::from(target);
        if self.mode == target && self.active_id.is_none() {
            self.set_mode(UiMode::Show);
        } else {
            self.set_mode(target);
        }
    }

    pub fn on_created(&mut self) {
        self.set_mode(UiMode::Show);
    }

    pub fn on_replaced(&mut self) {
        self.select_schema(None);
    }

    pub fn on_removed(&mut self) {
        self.select_schema(None);
    }

    /// Target for an Edit or Delete action.
    ///
    /// Calling this without an active schema is a caller bug: it asserts in
    /// debug builds and yields `None` in release builds.
    pub fn require_target(&self) -> Option<&SchemaId> {
        debug_assert!(
            self.active_id.is_some(),
            "{:?} action dispatched without an active schema",
            self.mode
        );
        self.active_id.as_ref()
    }

    pub fn is_active(&self, id: &SchemaId) -> bool {
        self.active_id.as_ref() == Some(id)
    }

    pub fn flags(&self) -> ViewFlags {
        let has_target = self.active_id.is_some();
        let mode = self.mode;
        ViewFlags {
            is_add_active: mode == UiMode::Add,
            is_edit_active: mode == UiMode::Edit,
            is_delete_active: mode == UiMode::Delete,
            is_showing_detail: has_target && mode == UiMode::Show,
            is_add_disabled: has_target && matches!(mode, UiMode::Edit | UiMode::Delete),
            is_edit_disabled: mode == UiMode::Add || (has_target && mode == UiMode::Delete),
            is_delete_disabled: mode == UiMode::Add || (has_target && mode == UiMode::Edit),
        }
    }
}
