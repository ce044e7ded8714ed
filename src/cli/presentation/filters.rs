//! Filter panel presentation: available users and categories with the
//! active selection marked.

use crate::dataset::{Category, User};
use crate::error::ApiError;
use crate::types::{ALL_CATEGORIES, ALL_USERS};
use crate::views::{SortColumn, UserFilter, ViewConfig};
use owo_colors::OwoColorize;
use serde_json::json;

fn chip(label: &str, active: bool, color: bool) -> String {
    match (active, color) {
        (true, true) => format!("[{}]", label.bold()),
        (true, false) => format!("[{}]", label),
        (false, _) => label.to_string(),
    }
}

fn is_selected(filter: &UserFilter, user: &User) -> bool {
    matches!(filter, UserFilter::Named(name) if *name == user.name)
}

pub fn format_filters_text(
    users: &[User],
    categories: &[Category],
    view: &ViewConfig,
    color: bool,
) -> String {
    let mut user_chips = vec![chip(ALL_USERS, view.user == UserFilter::All, color)];
    user_chips.extend(
        users
            .iter()
            .map(|u| chip(&u.name, is_selected(&view.user, u), color)),
    );

    let mut category_chips = vec![chip(ALL_CATEGORIES, view.categories.is_empty(), color)];
    category_chips.extend(
        categories
            .iter()
            .map(|c| chip(&c.title, view.categories.contains(&c.title), color)),
    );

    let title = if color {
        format!("{}", "Filters".bold().underline())
    } else {
        "Filters".to_string()
    };

    format!(
        "{}\n  Users:      {}\n  Categories: {}\n  Search:     {}",
        title,
        user_chips.join("  "),
        category_chips.join("  "),
        if view.query.is_empty() {
            "-".to_string()
        } else {
            format!("\"{}\"", view.query)
        }
    )
}

pub fn format_filters_json(
    users: &[User],
    categories: &[Category],
    view: &ViewConfig,
) -> Result<String, ApiError> {
    let users_json: Vec<serde_json::Value> = users
        .iter()
        .map(|u| {
            json!({
                "name": u.name,
                "sex": u.sex,
                "active": is_selected(&view.user, u),
            })
        })
        .collect();
    let categories_json: Vec<serde_json::Value> = categories
        .iter()
        .map(|c| {
            json!({
                "title": c.title,
                "icon": c.icon,
                "active": view.categories.contains(&c.title),
            })
        })
        .collect();

    let out = json!({
        "users": users_json,
        "categories": categories_json,
        "query": view.query,
        "sort": view.sort,
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ApiError::OutputError(format!("Failed to serialize JSON: {}", e)))
}

/// One-line description of the current view, shown above the table in `browse`.
pub fn format_view_summary(view: &ViewConfig, visible: usize, total: usize) -> String {
    let categories = if view.categories.is_empty() {
        ALL_CATEGORIES.to_string()
    } else {
        view.categories
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let sort = match view.sort.column {
        SortColumn::None if view.sort.reversed => "none (reversed)".to_string(),
        SortColumn::None => "none".to_string(),
        column if view.sort.reversed => format!("{} desc", column),
        column => format!("{} asc", column),
    };
    format!(
        "Showing {}/{} | user: {} | categories: {} | search: \"{}\" | sort: {}",
        visible,
        total,
        view.user.as_str(),
        categories,
        view.query,
        sort
    )
}
