//! View state transitions
//!
//! Every control of the product table maps to one [`ViewAction`]. The reducer
//! never edits a configuration in place; it returns the next one.

use super::{SortColumn, UserFilter, ViewConfig};
use serde::{Deserialize, Serialize};

/// Active sort column and direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    pub column: SortColumn,
    #[serde(default)]
    pub reversed: bool,
}

/// What activating the already-reversed column does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortToggle {
    /// Stay reversed on that column
    #[default]
    Sticky,
    /// Go back to input order
    Cycle,
}

impl SortState {
    pub fn new(column: SortColumn) -> Self {
        Self {
            column,
            reversed: false,
        }
    }

    /// Sort state after the user activates `column`.
    ///
    /// A different column starts ascending; the same column flips to reversed.
    /// Activating a reversed column again depends on `toggle`.
    pub fn activate(self, column: SortColumn, toggle: SortToggle) -> Self {
        if self.column != column {
            return Self::new(column);
        }
        match (self.reversed, toggle) {
            (false, _) => Self {
                column,
                reversed: true,
            },
            (true, SortToggle::Sticky) => self,
            (true, SortToggle::Cycle) => Self::default(),
        }
    }
}

/// A single user interaction with the table controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SelectAllUsers,
    SelectUser(String),
    SelectAllCategories,
    ToggleCategory(String),
    SetQuery(String),
    ClearQuery,
    ActivateSort(SortColumn),
    /// Clears query, user and category filters together; sort is kept
    ResetFilters,
}

/// Applies [`ViewAction`]s to view configurations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewReducer {
    toggle: SortToggle,
}

impl ViewReducer {
    pub fn new(toggle: SortToggle) -> Self {
        Self { toggle }
    }

    /// Next configuration after `action`
    pub fn reduce(&self, current: &ViewConfig, action: ViewAction) -> ViewConfig {
        let mut next = current.clone();
        match action {
            ViewAction::SelectAllUsers => next.user = UserFilter::All,
            ViewAction::SelectUser(name) => next.user = UserFilter::from_name(&name),
            ViewAction::SelectAllCategories => next.categories.clear(),
            ViewAction::ToggleCategory(title) => {
                if !next.categories.remove(&title) {
                    next.categories.insert(title);
                }
            }
            ViewAction::SetQuery(query) => next.query = query,
            ViewAction::ClearQuery => next.query.clear(),
            ViewAction::ActivateSort(column) => {
                next.sort = current.sort.activate(column, self.toggle);
            }
            ViewAction::ResetFilters => {
                next.query.clear();
                next.user = UserFilter::All;
                next.categories.clear();
            }
        }
        tracing::trace!(?next, "View state updated");
        next
    }
}
