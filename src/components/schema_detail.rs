//! Schema Detail Component
//!
//! Read-only view of the active schema while in show mode.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_active_schema, AppAction};

#[component]
pub fn SchemaDetail() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="schema-detail">
            <button class="back-btn" on:click=move |_| ctx.dispatch(AppAction::SelectSchema(None))>
                "← Back"
            </button>
            {move || use_active_schema(&store).map(|schema| view! {
                <h2>{schema.name.clone()}</h2>
                <p class="schema-detail-description">{schema.description.clone()}</p>
                <table class="item-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Quantity"</th>
                            <th>"Time"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {schema.items.into_iter().map(|item| view! {
                            <tr>
                                <td>{item.name}</td>
                                <td>{item.quantity}</td>
                                <td>{item.time}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            })}
        </section>
    }
}
