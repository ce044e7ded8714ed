//! Datasets
//!
//! Raw users, categories and products as supplied by the surrounding
//! application. A dataset directory holds one JSON array per collection.

use crate::error::DatasetError;
use crate::types::{CategoryId, ProductId, Sex, UserId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const USERS_FILE: &str = "users.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PRODUCTS_FILE: &str = "products.json";

/// A user who may own categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

/// A product category, owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    pub owner_id: UserId,
}

/// A product belonging to one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category_id: CategoryId,
}

/// The three raw collections, in their original order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl Dataset {
    pub fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            users,
            categories,
            products,
        }
    }

    /// Load `users.json`, `categories.json` and `products.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, DatasetError> {
        let users: Vec<User> = read_collection(&dir.join(USERS_FILE))?;
        let categories: Vec<Category> = read_collection(&dir.join(CATEGORIES_FILE))?;
        let products: Vec<Product> = read_collection(&dir.join(PRODUCTS_FILE))?;

        debug!(
            dir = %dir.display(),
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "Loaded dataset"
        );

        Ok(Self::new(users, categories, products))
    }

    /// Write the three collections into `dir`, creating it if needed.
    pub fn save_dir(&self, dir: &Path) -> Result<(), DatasetError> {
        std::fs::create_dir_all(dir).map_err(|source| DatasetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        write_collection(&dir.join(USERS_FILE), &self.users)?;
        write_collection(&dir.join(CATEGORIES_FILE), &self.categories)?;
        write_collection(&dir.join(PRODUCTS_FILE), &self.products)
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), DatasetError> {
    let raw = serde_json::to_string_pretty(items).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, raw).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
