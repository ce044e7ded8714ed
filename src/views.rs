//! Product Views
//!
//! Derives the visible rows of the product table from the joined products and
//! a view configuration. Filtering narrows before sorting, and sorting happens
//! before reversal; the pipeline never mutates its input and every returned
//! row borrows from it.

mod collate;
mod state;

pub use collate::{compare_case_insensitive, locale_compare};
pub use state::{SortState, SortToggle, ViewAction, ViewReducer};

use crate::join::EnrichedProduct;
use crate::types::ALL_USERS;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Column a table may be sorted by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
    /// Input order; also what any unrecognized key maps to.
    /// Must stay the last variant for `serde(other)`.
    #[default]
    #[serde(other)]
    None,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Id,
        SortColumn::Product,
        SortColumn::Category,
        SortColumn::User,
    ];

    /// Parse a sort key. Unknown keys yield `None`, which leaves order unchanged.
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "id" => SortColumn::Id,
            "product" => SortColumn::Product,
            "category" => SortColumn::Category,
            "user" => SortColumn::User,
            _ => SortColumn::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::None => "none",
            SortColumn::Id => "id",
            SortColumn::Product => "product",
            SortColumn::Category => "category",
            SortColumn::User => "user",
        }
    }

    /// Comparator for this column, or `None` when no sort applies.
    fn comparator(self) -> Option<Comparator> {
        let cmp: Comparator = match self {
            SortColumn::None => return None,
            SortColumn::Id => by_id,
            SortColumn::Product => by_product,
            SortColumn::Category => by_category,
            SortColumn::User => by_user,
        };
        Some(cmp)
    }
}

type Comparator = fn(&EnrichedProduct, &EnrichedProduct) -> Ordering;

fn by_id(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    a.id.cmp(&b.id)
}

fn by_product(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    compare_case_insensitive(&a.name, &b.name)
}

fn by_category(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    compare_case_insensitive(&a.category.title, &b.category.title)
}

fn by_user(a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    compare_case_insensitive(&a.user.name, &b.user.name)
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-select user filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserFilter {
    #[default]
    All,
    Named(String),
}

impl UserFilter {
    /// `"All"` and the empty string both mean no filter.
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() || name == ALL_USERS {
            UserFilter::All
        } else {
            UserFilter::Named(name.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserFilter::All => ALL_USERS,
            UserFilter::Named(name) => name,
        }
    }

    fn matches(&self, product: &EnrichedProduct) -> bool {
        match self {
            UserFilter::All => true,
            UserFilter::Named(name) => product.user.name == *name,
        }
    }
}

impl From<String> for UserFilter {
    fn from(name: String) -> Self {
        UserFilter::from_name(&name)
    }
}

impl From<UserFilter> for String {
    fn from(filter: UserFilter) -> Self {
        filter.as_str().to_string()
    }
}

/// Filter and sort configuration for one rendering of the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Case-insensitive substring matched against product names
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub user: UserFilter,

    /// Category titles to keep; empty keeps every category
    #[serde(default)]
    pub categories: BTreeSet<String>,

    #[serde(default)]
    pub sort: SortState,
}

impl ViewConfig {
    /// True when no filter narrows the table
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty() && self.user == UserFilter::All && self.categories.is_empty()
    }
}

/// Compose the visible rows for `config` out of `all_products`.
///
/// Pipeline, in order: user filter, category filter, query filter, stable
/// sort by the active column, reversal.
pub fn compose<'a>(
    all_products: &'a [EnrichedProduct],
    config: &ViewConfig,
) -> Vec<&'a EnrichedProduct> {
    let query = config.query.to_lowercase();

    let mut rows: Vec<&EnrichedProduct> = all_products
        .iter()
        .filter(|p| config.user.matches(p))
        .filter(|p| config.categories.is_empty() || config.categories.contains(&p.category.title))
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
        .collect();

    if let Some(cmp) = config.sort.column.comparator() {
        // slice::sort_by is stable
        rows.sort_by(|a, b| cmp(a, b));
    }

    if config.sort.reversed {
        rows.reverse();
    }

    rows
}
