//! Global Application State Store
//!
//! `AppState` plus a pure reducer. The reactive `Store` wrapper only feeds
//! actions through [`AppState::reduce`], so every transition can be tested
//! without a renderer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::crud::CrudOutcome;
use crate::mode::{CategoryButton, ModeState, UiMode, ViewFlags};
use crate::models::{Schema, SchemaId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Transient copies of the stored schemas
    pub schemas: Vec<Schema>,
    pub mode: ModeState,
    /// Set once the first load from storage finished
    pub loaded: bool,
}

/// Everything that can change `AppState`
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    Loaded(Vec<Schema>),
    SetMode(UiMode),
    SelectSchema(Option<SchemaId>),
    ToggleCategory(CategoryButton),
    /// A CRUD call succeeded
    Commit(CrudOutcome),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: AppAction) -> Self {
        match action {
            AppAction::Loaded(schemas) => {
                self.schemas = schemas;
                self.loaded = true;
            }
            AppAction::SetMode(mode) => self.mode.set_mode(mode),
            AppAction::SelectSchema(id) => self.mode.select_schema(id),
            AppAction::ToggleCategory(button) => self.mode.toggle_category_button(button),
            AppAction::Commit(CrudOutcome::Created(schema)) => {
                self.schemas.push(schema);
                self.mode.on_created();
            }
            AppAction::Commit(CrudOutcome::Replaced(schema)) => {
                if let Some(slot) = self.schemas.iter_mut().find(|s| s.id == schema.id) {
                    *slot = schema;
                }
                self.mode.on_replaced();
            }
            AppAction::Commit(CrudOutcome::Removed(id)) => {
                self.schemas.retain(|s| s.id != id);
                self.mode.on_removed();
            }
        }
        self
    }

    pub fn flags(&self) -> ViewFlags {
        self.mode.flags()
    }

    pub fn find_schema(&self, id: &SchemaId) -> Option<&Schema> {
        self.schemas.iter().find(|s| &s.id == id)
    }

    pub fn active_schema(&self) -> Option<&Schema> {
        self.mode.active_id.as_ref().and_then(|id| self.find_schema(id))
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Run one action through the reducer
pub fn dispatch(store: &AppStore, action: AppAction) {
    store.update(|state| {
        let current = std::mem::take(state);
        *state = current.reduce(action);
    });
}

pub fn use_mode(store: &AppStore) -> ModeState {
    store.mode().get()
}

pub fn use_flags(store: &AppStore) -> ViewFlags {
    store.mode().with(|mode| mode.flags())
}

pub fn use_schemas(store: &AppStore) -> Vec<Schema> {
    store.schemas().get()
}

pub fn use_active_schema(store: &AppStore) -> Option<Schema> {
    store.with(|state| state.active_schema().cloned())
}

pub fn use_is_active(store: &AppStore, id: &SchemaId) -> bool {
    store.mode().with(|mode| mode.is_active(id))
}

pub fn use_loaded(store: &AppStore) -> bool {
    store.loaded().get()
}
