//! Property-based tests for the view pipeline
