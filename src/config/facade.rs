//! Config loader facade: single entry point for building an [`AppConfig`].

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::AppConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

/// Loads configuration from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest last): defaults, global file, workspace file, environment.
    pub fn load(workspace_root: &Path) -> Result<AppConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config: AppConfig = builder
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;

        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file; skips the global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let config: AppConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()?;

        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
