//! Integration tests for the product table

mod cli_run;
mod config_integration;
mod dataset_join;
mod test_utils;
