//! CLI route: single route table and run context. Dispatches to the view
//! composer and presentation.

use crate::cli::browse::BrowseSession;
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_filters_json, format_filters_text, format_products_json, format_products_text,
    TableOptions,
};
use crate::config::{AppConfig, ConfigLoader};
use crate::dataset::Dataset;
use crate::error::ApiError;
use crate::join::{join, EnrichedProduct};
use crate::views::{compose, SortColumn, SortState, UserFilter, ViewConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Runtime context for CLI execution: configuration, the raw dataset and the
/// joined product list built from it.
pub struct RunContext {
    config: AppConfig,
    dataset_path: PathBuf,
    dataset: Dataset,
    products: Vec<EnrichedProduct>,
}

impl RunContext {
    /// Load configuration, then the dataset, then join it.
    ///
    /// `data` overrides the configured dataset path. A relative configured
    /// path is resolved against `workspace_root`.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        data: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let dataset_path = match data {
            Some(path) => path,
            None => resolve_against(&workspace_root, &config.dataset.path),
        };

        let dataset = Dataset::load_dir(&dataset_path)?;
        Self::from_dataset(config, dataset_path, dataset)
    }

    /// Build a context from an in-memory dataset.
    pub fn from_dataset(
        config: AppConfig,
        dataset_path: PathBuf,
        dataset: Dataset,
    ) -> Result<Self, ApiError> {
        let products = join(&dataset)?;
        info!(
            dataset = %dataset_path.display(),
            products = products.len(),
            "Product table ready"
        );
        Ok(Self {
            config,
            dataset_path,
            dataset,
            products,
        })
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!("command", name = command_name(command));
        let _guard = span.enter();

        match command {
            Commands::List {
                user,
                categories,
                query,
                sort,
                reverse,
                format,
            } => {
                let view = self.list_view(
                    user.as_deref(),
                    categories,
                    query.as_deref(),
                    sort.as_deref(),
                    *reverse,
                );
                let format = self.output_format(format.as_deref())?;
                self.handle_list(&view, format)
            }
            Commands::Filters { format } => {
                let format = self.output_format(format.as_deref())?;
                let view = ViewConfig::default();
                if format == "json" {
                    format_filters_json(&self.dataset.users, &self.dataset.categories, &view)
                } else {
                    Ok(format_filters_text(
                        &self.dataset.users,
                        &self.dataset.categories,
                        &view,
                        self.config.display.color,
                    ))
                }
            }
            Commands::Browse => {
                let mut session = BrowseSession::new(
                    &self.dataset,
                    &self.products,
                    self.config.view.reducer(),
                    self.table_options(),
                    self.config.view.initial_view(),
                );
                session.run()?;
                Ok("Bye.".to_string())
            }
        }
    }

    /// View for a one-shot `list`: flags replace the configured defaults.
    pub fn list_view(
        &self,
        user: Option<&str>,
        categories: &[String],
        query: Option<&str>,
        sort: Option<&str>,
        reverse: bool,
    ) -> ViewConfig {
        let column = sort
            .map(SortColumn::parse)
            .unwrap_or(self.config.view.default_sort);
        ViewConfig {
            query: query.unwrap_or_default().to_string(),
            user: user.map(UserFilter::from_name).unwrap_or_default(),
            categories: categories.iter().cloned().collect(),
            sort: SortState {
                column,
                reversed: reverse,
            },
        }
    }

    fn handle_list(&self, view: &ViewConfig, format: &str) -> Result<String, ApiError> {
        let rows = compose(&self.products, view);
        debug!(visible = rows.len(), total = self.products.len(), "Composed view");
        if format == "json" {
            format_products_json(&rows, view)
        } else {
            Ok(format_products_text(&rows, view.sort, self.table_options()))
        }
    }

    fn output_format<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str, ApiError> {
        let format = requested.unwrap_or(self.config.view.default_format.as_str());
        match format {
            "text" | "json" => Ok(format),
            other => Err(ApiError::InvalidInput(format!(
                "Unknown output format '{}' (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn table_options(&self) -> TableOptions {
        TableOptions::from(&self.config.display)
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
