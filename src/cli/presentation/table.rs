//! Product table presentation: text and json formatters.

use crate::config::DisplayConfig;
use crate::error::ApiError;
use crate::join::EnrichedProduct;
use crate::types::Sex;
use crate::views::{SortColumn, SortState, ViewConfig};
use comfy_table::{Cell, CellAlignment, Color, Table};
use serde_json::json;

/// Shown instead of the table when no product survives the filters
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Rendering options for the product table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub color: bool,
    pub ascii: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            color: true,
            ascii: false,
        }
    }
}

impl From<&DisplayConfig> for TableOptions {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            color: display.color,
            ascii: display.preset == "ascii",
        }
    }
}

pub fn format_products_text(
    rows: &[&EnrichedProduct],
    sort: SortState,
    options: TableOptions,
) -> String {
    if rows.is_empty() {
        return NO_MATCHING_MESSAGE.to_string();
    }

    let mut table = Table::new();
    if options.ascii {
        table.load_preset(comfy_table::presets::ASCII_FULL);
    } else {
        table.load_preset(comfy_table::presets::UTF8_FULL);
    }
    table.set_header(vec![
        header("ID", SortColumn::Id, sort, options),
        header("Product", SortColumn::Product, sort, options),
        header("Category", SortColumn::Category, sort, options),
        header("User", SortColumn::User, sort, options),
    ]);

    for product in rows {
        let mut user = Cell::new(&product.user.name);
        if options.color {
            user = user.fg(match product.user.sex {
                Sex::Male => Color::Blue,
                Sex::Female => Color::Red,
            });
        }
        table.add_row(vec![
            Cell::new(product.id).set_alignment(CellAlignment::Right),
            Cell::new(&product.name),
            Cell::new(product.category_label()),
            user,
        ]);
    }

    table.to_string()
}

/// Header cell with a direction marker on the active sort column
fn header(title: &str, column: SortColumn, sort: SortState, options: TableOptions) -> Cell {
    if sort.column != column {
        return Cell::new(title);
    }
    let marker = match (sort.reversed, options.ascii) {
        (false, false) => "▲",
        (true, false) => "▼",
        (false, true) => "^",
        (true, true) => "v",
    };
    Cell::new(format!("{} {}", title, marker))
}

pub fn format_products_json(
    rows: &[&EnrichedProduct],
    view: &ViewConfig,
) -> Result<String, ApiError> {
    let message = rows.is_empty().then_some(NO_MATCHING_MESSAGE);
    let out = json!({
        "view": view,
        "count": rows.len(),
        "products": rows,
        "message": message,
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ApiError::OutputError(format!("Failed to serialize JSON: {}", e)))
}
