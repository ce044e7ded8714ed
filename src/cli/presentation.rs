//! CLI presentation: text and json formatters for the table and filter panel.

mod filters;
mod table;

pub use filters::{format_filters_json, format_filters_text, format_view_summary};
pub use table::{format_products_json, format_products_text, TableOptions, NO_MATCHING_MESSAGE};
