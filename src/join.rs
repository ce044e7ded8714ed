//! Dataset join
//!
//! Attaches each product's category and that category's owner. The join runs
//! once at startup; its output order is the product order of the dataset.

use crate::dataset::{Category, Dataset, Product, User};
use crate::error::JoinError;
use crate::types::{CategoryId, ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A product with its category and category owner resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub user: User,
}

impl EnrichedProduct {
    /// Category cell text: `"<icon> - <title>"`
    pub fn category_label(&self) -> String {
        format!("{} - {}", self.category.icon, self.category.title)
    }
}

/// Join the three collections.
///
/// Fails on the first product whose category is missing, or the first
/// category (in product order) whose owner is missing. Duplicate user or
/// category ids are rejected.
pub fn join(dataset: &Dataset) -> Result<Vec<EnrichedProduct>, JoinError> {
    let users = index_by_id(&dataset.users, "user", |u| u.id)?;
    let categories = index_by_id(&dataset.categories, "category", |c| c.id)?;

    let enriched = dataset
        .products
        .iter()
        .map(|product| enrich(product, &categories, &users))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(products = enriched.len(), "Joined dataset");
    Ok(enriched)
}

fn enrich(
    product: &Product,
    categories: &HashMap<CategoryId, &Category>,
    users: &HashMap<UserId, &User>,
) -> Result<EnrichedProduct, JoinError> {
    let category = categories
        .get(&product.category_id)
        .ok_or(JoinError::UnresolvedCategory {
            product_id: product.id,
            category_id: product.category_id,
        })?;
    let user = users
        .get(&category.owner_id)
        .ok_or(JoinError::UnresolvedOwner {
            category_id: category.id,
            owner_id: category.owner_id,
        })?;

    Ok(EnrichedProduct {
        id: product.id,
        name: product.name.clone(),
        category: (*category).clone(),
        user: (*user).clone(),
    })
}

fn index_by_id<'a, T>(
    items: &'a [T],
    kind: &'static str,
    id_of: impl Fn(&T) -> u32,
) -> Result<HashMap<u32, &'a T>, JoinError> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        let id = id_of(item);
        if index.insert(id, item).is_some() {
            return Err(JoinError::DuplicateId { kind, id });
        }
    }
    Ok(index)
}
