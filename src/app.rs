//! Schema Board App
//!
//! Root component: loads the stored schemas once and picks the view for the
//! current mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CategoryBar, SchemaDetail, SchemaForm, SchemaList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::mode::UiMode;
use crate::models::Schema;
use crate::storage::{LocalStorageGateway, SchemaGateway};
use crate::store::{use_active_schema, use_flags, use_mode, AppAction, AppState};

/// What the form area should show
#[derive(Clone, Debug, PartialEq)]
enum FormTarget {
    New,
    Existing(Schema),
}

fn mode_hint(mode: UiMode, has_target: bool) -> Option<&'static str> {
    match (mode, has_target) {
        (UiMode::Edit, false) => Some("Select a schema to edit"),
        (UiMode::Delete, false) => Some("Select a schema to delete"),
        _ => None,
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new());
    let gateway = LocalStorageGateway::local(config.storage_key.clone(), config.seed_sample);
    let ctx = AppContext::new(store, gateway);

    // Provide context to all children
    provide_context(ctx);

    // Load schemas on mount
    Effect::new(move |_| {
        let gateway = ctx.gateway();
        spawn_local(async move {
            match gateway.load().await {
                Ok(stored) => {
                    log::info!("[APP] loaded {} schemas", stored.schemas.len());
                    ctx.dispatch(AppAction::Loaded(stored.schemas));
                }
                Err(err) => {
                    log::error!("[APP] failed to load schemas: {}", err);
                    ctx.dispatch(AppAction::Loaded(Vec::new()));
                }
            }
        });
    });

    let form_target = Memo::new(move |_| match use_mode(&store).mode {
        UiMode::Add => Some(FormTarget::New),
        UiMode::Edit => use_active_schema(&store).map(FormTarget::Existing),
        UiMode::Show | UiMode::Delete => None,
    });
    let hint = move || {
        let mode = use_mode(&store);
        mode_hint(mode.mode, mode.active_id.is_some())
            .map(|text| view! { <p class="mode-hint">{text}</p> })
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Schemas"</h1>
                <CategoryBar />
            </header>
            <main class="main-content">
                {move || match form_target.get() {
                    Some(FormTarget::New) => view! { <SchemaForm initial=None /> }.into_any(),
                    Some(FormTarget::Existing(schema)) => {
                        view! { <SchemaForm initial=Some(schema) /> }.into_any()
                    }
                    None if use_flags(&store).is_showing_detail => view! { <SchemaDetail /> }.into_any(),
                    None => view! {
                        {hint}
                        <SchemaList />
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
