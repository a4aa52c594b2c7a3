//! Schema Form Component
//!
//! Add/edit form: name, description, and the item rows editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ItemRows;
use crate::context::use_app_context;
use crate::crud;
use crate::error::AppError;
use crate::models::{Schema, SchemaDraft};
use crate::selection::ItemRowsEditor;
use crate::store::AppAction;

/// Inline error for one field path
pub fn field_error(error: ReadSignal<Option<AppError>>, field: String) -> impl IntoView {
    move || {
        error.with(|e| {
            e.as_ref()
                .and_then(|e| e.field_message(&field))
                .map(|msg| view! { <span class="field-error">{msg.to_string()}</span> })
        })
    }
}

/// Form for creating a schema (`initial = None`) or replacing one
#[component]
pub fn SchemaForm(initial: Option<Schema>) -> impl IntoView {
    let ctx = use_app_context();

    let is_edit = initial.is_some();
    let editing_id = StoredValue::new(initial.as_ref().map(|s| s.id.clone()));
    let (name, set_name) = signal(initial.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(initial.as_ref().map(|s| s.description.clone()).unwrap_or_default());
    let editor = RwSignal::new(ItemRowsEditor::new(initial.map(|s| s.items).unwrap_or_default()));
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = SchemaDraft {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            items: editor.with_untracked(|e| e.items().to_vec()),
        };
        if let Err(err) = draft.validate() {
            set_error.set(Some(err));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        let gateway = ctx.gateway();
        let target = editing_id.get_value();
        spawn_local(async move {
            let result = match target {
                Some(id) => crud::replace_schema(&gateway, draft.with_id(id)).await,
                None => crud::create_schema(&gateway, draft).await,
            };
            set_saving.set(false);
            match result {
                Ok(outcome) => ctx.dispatch(AppAction::Commit(outcome)),
                Err(err) => set_error.set(Some(err)),
            }
        });
    };

    let on_cancel = move |_| {
        if is_edit {
            ctx.dispatch(AppAction::SelectSchema(None));
        } else {
            ctx.dispatch(AppAction::SetMode(crate::mode::UiMode::Show));
        }
    };

    let general_error = move || {
        error.with(|e| match e {
            Some(AppError::Validation(_)) | None => None,
            Some(other) => Some(view! { <p class="form-error">{other.to_string()}</p> }),
        })
    };

    view! {
        <form class="schema-form" on:submit=on_submit>
            <h2>{if is_edit { "Edit schema" } else { "New schema" }}</h2>
            <label class="form-field">
                <span>"Name"</span>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                {field_error(error, "name".to_string())}
            </label>
            <label class="form-field">
                <span>"Description"</span>
                <textarea
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <ItemRows editor=editor error=error />

            {general_error}
            <div class="form-actions">
                <button type="submit" disabled=move || saving.get()>
                    {if is_edit { "Save" } else { "Create" }}
                </button>
                <button type="button" class="cancel-btn" on:click=on_cancel>"Cancel"</button>
            </div>
        </form>
    }
}
