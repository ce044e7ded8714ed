//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix of environment overrides, e.g. `PRODTABLE__DATASET__PATH`.
pub const ENV_PREFIX: &str = "PRODTABLE";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("dataset.path", "data")?
        .set_default("view.sort_toggle", "sticky")?
        .set_default("view.default_sort", "none")?
        .set_default("view.default_format", "text")?
        .set_default("display.color", true)?
        .set_default("display.preset", "utf8")
}

/// Environment source; applied last so it overrides every file.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
