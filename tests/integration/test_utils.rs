//! Shared test utilities for integration tests
//!
//! Builds small datasets and writes them into temporary directories, and
//! serializes access to environment variables read by the config loader.

use prodtable::dataset::{Category, Dataset, Product, User};
use prodtable::types::Sex;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

pub fn user(id: u32, name: &str, sex: Sex) -> User {
    User {
        id,
        name: name.to_string(),
        sex,
    }
}

pub fn category(id: u32, title: &str, icon: &str, owner_id: u32) -> Category {
    Category {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id,
    }
}

pub fn product(id: u32, name: &str, category_id: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
    }
}

/// Small shop: two owners, three categories, six products
pub fn shop() -> Dataset {
    Dataset::new(
        vec![
            user(1, "Roma", Sex::Male),
            user(2, "Anna", Sex::Female),
            user(3, "Max", Sex::Male),
        ],
        vec![
            category(1, "Grocery", "🍞", 2),
            category(2, "Drinks", "🍺", 1),
            category(3, "Fruits", "🍏", 3),
        ],
        vec![
            product(1, "Milk", 2),
            product(2, "Bread", 1),
            product(3, "apple juice", 2),
            product(4, "Apple", 3),
            product(5, "Eggs", 1),
            product(6, "banana", 3),
        ],
    )
}

/// Write `dataset` into a fresh temp directory
pub fn write_dataset(dataset: &Dataset) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    dataset.save_dir(temp_dir.path()).unwrap();
    temp_dir
}

/// Run `f` with `vars` set, restoring previous values afterwards
pub fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(String, Option<String>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var(key).ok()))
        .collect();

    for (key, value) in vars {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, value) in saved {
        match value {
            Some(v) => std::env::set_var(&key, v),
            None => std::env::remove_var(&key),
        }
    }

    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}
