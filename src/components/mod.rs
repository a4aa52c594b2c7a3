//! UI Components
//!
//! Leptos components rendering the store.

mod category_bar;
mod item_rows;
mod schema_delete_confirm;
mod schema_detail;
mod schema_form;
mod schema_list;

pub use category_bar::CategoryBar;
pub use item_rows::ItemRows;
pub use schema_delete_confirm::SchemaDeleteConfirm;
pub use schema_detail::SchemaDetail;
pub use schema_form::SchemaForm;
pub use schema_list::SchemaList;
