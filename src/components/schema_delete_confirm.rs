//! Schema Delete Confirm Component
//!
//! Two-step removal of the active schema in delete mode. The first click
//! names the schema and what goes with it; only the second click deletes.

use leptos::prelude::*;

/// Question shown before a schema is removed
pub fn confirm_prompt(name: &str, item_count: usize) -> String {
    let name = name.trim();
    let target = if name.is_empty() {
        "this schema".to_string()
    } else {
        format!("'{}'", name)
    };
    match item_count {
        0 => format!("Delete {}?", target),
        1 => format!("Delete {} and its 1 item?", target),
        n => format!("Delete {} and its {} items?", target, n),
    }
}

#[component]
pub fn SchemaDeleteConfirm(
    #[prop(into)] schema_name: String,
    item_count: usize,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = confirm_prompt(&schema_name, item_count);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class="delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "Delete schema"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "Keep"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_prompt_names_schema() {
        assert_eq!(confirm_prompt("Leg day", 0), "Delete 'Leg day'?");
        assert_eq!(confirm_prompt("  Leg day ", 1), "Delete 'Leg day' and its 1 item?");
        assert_eq!(confirm_prompt("Leg day", 4), "Delete 'Leg day' and its 4 items?");
    }

    #[test]
    fn test_confirm_prompt_without_name() {
        assert_eq!(confirm_prompt("   ", 0), "Delete this schema?");
        assert_eq!(confirm_prompt("", 2), "Delete this schema and its 2 items?");
    }
}
