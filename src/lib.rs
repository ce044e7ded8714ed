//! Prodtable: Product Table Views
//!
//! Joins users, categories and products into enriched rows and derives the
//! visible, filtered and sorted table from an immutable view configuration.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod join;
pub mod logging;
pub mod types;
pub mod views;
