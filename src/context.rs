//! Application Context
//!
//! Store and storage gateway provided via Leptos Context API.

use leptos::prelude::*;

use crate::store::{dispatch, AppAction, AppStore};
use crate::storage::LocalStorageGateway;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    gateway: StoredValue<LocalStorageGateway>,
}

impl AppContext {
    pub fn new(store: AppStore, gateway: LocalStorageGateway) -> Self {
        Self {
            store,
            gateway: StoredValue::new(gateway),
        }
    }

    /// Gateway handle for async CRUD calls
    pub fn gateway(&self) -> LocalStorageGateway {
        self.gateway.get_value()
    }

    pub fn dispatch(&self, action: AppAction) {
        dispatch(&self.store, action);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
