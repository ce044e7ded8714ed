//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global config file,
//! the workspace config file, then `PRODTABLE__*` environment variables.

use crate::logging::{validate_logging_config, LoggingConfig};
use crate::views::{SortColumn, SortState, SortToggle, ViewConfig, ViewReducer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub view: ViewSettings,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the dataset lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Directory holding users.json, categories.json and products.json
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

/// View behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// What activating an already reversed column does
    #[serde(default)]
    pub sort_toggle: SortToggle,

    /// Sort column applied when none is given on the command line
    #[serde(default)]
    pub default_sort: SortColumn,

    /// Output format: text or json
    #[serde(default = "default_output_format")]
    pub default_format: String,
}

fn default_output_format() -> String {
    "text".to_string()
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            sort_toggle: SortToggle::default(),
            default_sort: SortColumn::default(),
            default_format: default_output_format(),
        }
    }
}

impl ViewSettings {
    pub fn reducer(&self) -> ViewReducer {
        ViewReducer::new(self.sort_toggle)
    }

    /// Starting view for a session: no filters, the configured default sort.
    pub fn initial_view(&self) -> ViewConfig {
        ViewConfig {
            sort: SortState::new(self.default_sort),
            ..Default::default()
        }
    }
}

/// Table rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Color the user column by sex
    #[serde(default = "default_true")]
    pub color: bool,

    /// Table border preset: utf8 or ascii
    #[serde(default = "default_preset")]
    pub preset: String,
}

fn default_true() -> bool {
    true
}

fn default_preset() -> String {
    "utf8".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            preset: default_preset(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Dataset(String),
    View(String),
    Display(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Dataset(msg) => write!(f, "Dataset: {}", msg),
            ValidationError::View(msg) => write!(f, "View: {}", msg),
            ValidationError::Display(msg) => write!(f, "Display: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AppConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.dataset.path.as_os_str().is_empty() {
            errors.push(ValidationError::Dataset(
                "Dataset path cannot be empty".to_string(),
            ));
        }

        if !matches!(self.view.default_format.as_str(), "text" | "json") {
            errors.push(ValidationError::View(format!(
                "Invalid default format: {} (must be 'text' or 'json')",
                self.view.default_format
            )));
        }

        if !matches!(self.display.preset.as_str(), "utf8" | "ascii") {
            errors.push(ValidationError::Display(format!(
                "Invalid table preset: {} (must be 'utf8' or 'ascii')",
                self.display.preset
            )));
        }

        if let Err(e) = validate_logging_config(&self.logging) {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
