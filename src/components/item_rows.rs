//! Item Rows Component
//!
//! Editable item list with remove mode: check rows, then press Remove again
//! to drop them all at once.

use leptos::prelude::*;

use crate::components::schema_form::field_error;
use crate::error::AppError;
use crate::selection::{ItemField, ItemRowsEditor, SelectAllState};

/// One editable row
#[component]
fn ItemRow(
    editor: RwSignal<ItemRowsEditor>,
    index: usize,
    error: ReadSignal<Option<AppError>>,
) -> impl IntoView {
    let value = move |field: ItemField| {
        editor.with(|e| {
            e.items()
                .get(index)
                .map(|item| match field {
                    ItemField::Name => item.name.clone(),
                    ItemField::Quantity => item.quantity.clone(),
                    ItemField::Time => item.time.clone(),
                })
                .unwrap_or_default()
        })
    };
    let remove_mode = move || editor.with(|e| e.selection().remove_mode_active());

    view! {
        <div class="item-row">
            <Show when=remove_mode>
                <input
                    type="checkbox"
                    class="item-row-check"
                    prop:checked=move || editor.with(|e| e.selection().is_selected(index))
                    on:change=move |_| editor.update(|e| e.toggle_row(index))
                />
            </Show>
            <div class="item-field">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || value(ItemField::Name)
                    on:input=move |ev| editor.update(|e| e.set_field(index, ItemField::Name, event_target_value(&ev)))
                />
                {field_error(error, format!("items[{}].name", index))}
            </div>
            <div class="item-field">
                <input
                    type="text"
                    placeholder="Quantity"
                    prop:value=move || value(ItemField::Quantity)
                    on:input=move |ev| editor.update(|e| e.set_field(index, ItemField::Quantity, event_target_value(&ev)))
                />
                {field_error(error, format!("items[{}].quantity", index))}
            </div>
            <div class="item-field">
                <input
                    type="text"
                    placeholder="Time (optional)"
                    prop:value=move || value(ItemField::Time)
                    on:input=move |ev| editor.update(|e| e.set_field(index, ItemField::Time, event_target_value(&ev)))
                />
            </div>
        </div>
    }
}

/// Item list editor with the remove-mode toolbar
#[component]
pub fn ItemRows(editor: RwSignal<ItemRowsEditor>, error: ReadSignal<Option<AppError>>) -> impl IntoView {
    // Rows only re-render when the count changes, so typing keeps focus
    let row_count = Memo::new(move |_| editor.with(|e| e.items().len()));
    let remove_mode = move || editor.with(|e| e.selection().remove_mode_active());
    let select_all = move || editor.with(|e| e.select_all_state());
    let has_selection = move || editor.with(|e| !e.selection().selected().is_empty());

    let remove_label = move || match (remove_mode(), has_selection()) {
        (true, true) => "Remove selected",
        (true, false) => "Done",
        (false, _) => "Remove",
    };

    view! {
        <div class="item-rows">
            <div class="item-rows-toolbar">
                <button
                    type="button"
                    class="add-row-btn"
                    on:click=move |_| editor.update(|e| {
                        e.add_row();
                    })
                >
                    "Add item"
                </button>
                <button
                    type="button"
                    class=move || if remove_mode() { "remove-btn active" } else { "remove-btn" }
                    disabled=move || row_count.get() == 0 && !remove_mode()
                    on:click=move |_| editor.update(|e| {
                        e.toggle_remove_mode();
                    })
                >
                    {remove_label}
                </button>
                <Show when=remove_mode>
                    <label class="select-all">
                        <input
                            type="checkbox"
                            prop:checked=move || select_all() == SelectAllState::All
                            prop:indeterminate=move || select_all() == SelectAllState::Partial
                            on:change=move |_| editor.update(|e| e.toggle_all())
                        />
                        "Select all"
                    </label>
                </Show>
            </div>
            {move || {
                (0..row_count.get())
                    .map(|index| view! { <ItemRow editor=editor index=index error=error /> })
                    .collect_view()
            }}
        </div>
    }
}
