//! Core identifiers and small value types shared across the crate.

use serde::{Deserialize, Serialize};

/// User identifier as it appears in the datasets
pub type UserId = u32;

/// Category identifier as it appears in the datasets
pub type CategoryId = u32;

/// Product identifier as it appears in the datasets
pub type ProductId = u32;

/// Sentinel user filter value meaning "no user filter"
pub const ALL_USERS: &str = "All";

/// Label of the "every category" chip when no category filter is set
pub const ALL_CATEGORIES: &str = "All";

/// User sex marker; drives the color of the user column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}
