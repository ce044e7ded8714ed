//! Error types for the product table.

use crate::types::{CategoryId, ProductId, UserId};
use std::path::PathBuf;
use thiserror::Error;

/// Join-time errors: a reference between datasets could not be resolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    #[error("Unresolved reference: product {product_id} points at missing category {category_id}")]
    UnresolvedCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    #[error("Unresolved reference: category {category_id} points at missing owner {owner_id}")]
    UnresolvedOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
