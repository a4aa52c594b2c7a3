//! Schema List Component
//!
//! Grid of schema cards. Clicking a card makes it the active schema; in
//! delete mode the active card offers the delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::SchemaDeleteConfirm;
use crate::context::use_app_context;
use crate::crud;
use crate::models::Schema;
use crate::store::{use_flags, use_is_active, use_loaded, use_mode, use_schemas, AppAction};

/// Single schema card
#[component]
fn SchemaCard(schema: Schema) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = schema.id.clone();
    let item_count = schema.items.len();
    let schema_name = schema.name.clone();

    let is_active = {
        let id = id.clone();
        Signal::derive(move || use_is_active(&store, &id))
    };
    let show_delete = move || is_active.get() && use_flags(&store).is_delete_active;

    let on_click = move |_| {
        let next = if is_active.get_untracked() { None } else { Some(id.clone()) };
        ctx.dispatch(AppAction::SelectSchema(next));
    };

    let confirm_delete = move |_: ()| {
        let Some(target) = use_mode(&store).require_target().cloned() else {
            return;
        };
        let gateway = ctx.gateway();
        spawn_local(async move {
            match crud::remove_schema(&gateway, target).await {
                Ok(outcome) => ctx.dispatch(AppAction::Commit(outcome)),
                Err(err) => log::error!("[LIST] delete failed: {}", err),
            }
        });
    };

    view! {
        <div
            class=move || if is_active.get() { "schema-card active" } else { "schema-card" }
            on:click=on_click
        >
            <h3 class="schema-card-title">{schema.name.clone()}</h3>
            <p class="schema-card-description">{schema.description.clone()}</p>
            <span class="schema-card-count">{format!("{} items", item_count)}</span>
            <Show when=show_delete>
                <SchemaDeleteConfirm
                    schema_name=schema_name.clone()
                    item_count=item_count
                    on_confirm=confirm_delete
                />
            </Show>
        </div>
    }
}

/// All schemas, or an empty-state hint
#[component]
pub fn SchemaList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let is_empty = move || use_loaded(&store) && use_schemas(&store).is_empty();

    view! {
        <Show when=move || use_loaded(&store) fallback=|| view! { <p class="loading">"Loading..."</p> }>
            <Show when=is_empty>
                <p class="empty-state">"No schemas yet. Use Add to create one."</p>
            </Show>
            <div class="schema-grid">
                <For
                    each=move || use_schemas(&store)
                    key=|schema| (
                        schema.id.clone(),
                        schema.name.clone(),
                        schema.description.clone(),
                        schema.items.len(),
                    )
                    children=move |schema| view! { <SchemaCard schema=schema /> }
                />
            </div>
        </Show>
    }
}
