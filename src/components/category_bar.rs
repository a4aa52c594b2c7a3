//! Category Bar Component
//!
//! Add / Edit / Delete buttons driving the mode state machine.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::mode::{CategoryButton, UiMode};
use crate::store::{use_flags, AppAction};

fn button_class(active: bool) -> &'static str {
    if active { "category-btn active" } else { "category-btn" }
}

/// Top bar with the three category buttons
#[component]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let flags = Memo::new(move |_| use_flags(&store));

    let on_add = move |_| {
        let next = if flags.get().is_add_active { UiMode::Show } else { UiMode::Add };
        ctx.dispatch(AppAction::SetMode(next));
    };

    view! {
        <nav class="category-bar">
            <button
                class=move || button_class(flags.get().is_add_active)
                disabled=move || flags.get().is_add_disabled
                on:click=on_add
            >
                "Add"
            </button>
            <button
                class=move || button_class(flags.get().is_edit_active)
                disabled=move || flags.get().is_edit_disabled
                on:click=move |_| ctx.dispatch(AppAction::ToggleCategory(CategoryButton::Edit))
            >
                "Edit"
            </button>
            <button
                class=move || button_class(flags.get().is_delete_active)
                disabled=move || flags.get().is_delete_disabled
                on:click=move |_| ctx.dispatch(AppAction::ToggleCategory(CategoryButton::Delete))
            >
                "Delete"
            </button>
        </nav>
    }
}
