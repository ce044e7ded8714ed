//! Integration tests for the layered configuration

use super::test_utils::with_env;
use prodtable::config::{
    global_config_path, AppConfig, ConfigLoader, WORKSPACE_CONFIG_FILE,
};
use prodtable::views::{SortColumn, SortToggle};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_file() {
    let temp_dir = TempDir::new().unwrap();
    let xdg = temp_dir.path().join("xdg");

    with_env(
        &[
            ("XDG_CONFIG_HOME", Some(xdg.to_str().unwrap())),
            ("PRODTABLE__DATASET__PATH", None),
        ],
        || {
            let config = ConfigLoader::load(temp_dir.path()).unwrap();
            assert_eq!(config.dataset.path, PathBuf::from("data"));
            assert_eq!(config.view.sort_toggle, SortToggle::Sticky);
            assert!(config.validate().is_ok());
        },
    );
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let temp_dir = TempDir::new().unwrap();
    let xdg = temp_dir.path().join("xdg");
    let global_dir = xdg.join("prodtable");
    std::fs::create_dir_all(&global_dir).unwrap();
    std::fs::write(
        global_dir.join("config.toml"),
        r#"
[dataset]
path = "global-data"

[view]
sort_toggle = "cycle"
default_sort = "user"
"#,
    )
    .unwrap();

    let workspace = temp_dir.path().join("ws");
    std::fs::create_dir_all(&workspace).unwrap();
    std::fs::write(
        workspace.join(WORKSPACE_CONFIG_FILE),
        r#"
[dataset]
path = "ws-data"
"#,
    )
    .unwrap();

    with_env(
        &[
            ("XDG_CONFIG_HOME", Some(xdg.to_str().unwrap())),
            ("PRODTABLE__DATASET__PATH", None),
        ],
        || {
            assert_eq!(
                global_config_path().unwrap(),
                global_dir.join("config.toml")
            );

            let config = ConfigLoader::load(&workspace).unwrap();
            // Workspace wins for dataset; global values survive elsewhere.
            assert_eq!(config.dataset.path, PathBuf::from("ws-data"));
            assert_eq!(config.view.sort_toggle, SortToggle::Cycle);
            assert_eq!(config.view.default_sort, SortColumn::User);
        },
    );
}

#[test]
fn test_environment_overrides_files() {
    let temp_dir = TempDir::new().unwrap();
    let xdg = temp_dir.path().join("xdg");
    std::fs::write(
        temp_dir.path().join(WORKSPACE_CONFIG_FILE),
        "[dataset]\npath = \"from-file\"\n",
    )
    .unwrap();

    with_env(
        &[
            ("XDG_CONFIG_HOME", Some(xdg.to_str().unwrap())),
            ("PRODTABLE__DATASET__PATH", Some("from-env")),
            ("PRODTABLE__DISPLAY__COLOR", Some("false")),
        ],
        || {
            let config = ConfigLoader::load(temp_dir.path()).unwrap();
            assert_eq!(config.dataset.path, PathBuf::from("from-env"));
            assert!(!config.display.color);
        },
    );
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_written_config_loads_back() {
    let temp_dir = TempDir::new().unwrap();
    let xdg = temp_dir.path().join("xdg");

    let mut written = AppConfig::default();
    written.dataset.path = PathBuf::from("shop-data");
    written.view.sort_toggle = SortToggle::Cycle;
    written.view.default_sort = SortColumn::Category;
    written.view.default_format = "json".to_string();
    written.display.preset = "ascii".to_string();
    written.logging.level = "debug".to_string();

    let config_file = temp_dir.path().join("custom.toml");
    std::fs::write(&config_file, toml::to_string_pretty(&written).unwrap()).unwrap();

    with_env(
        &[
            ("XDG_CONFIG_HOME", Some(xdg.to_str().unwrap())),
            ("PRODTABLE__DATASET__PATH", None),
        ],
        || {
            let loaded = ConfigLoader::load_from_file(&config_file).unwrap();
            assert_eq!(loaded, written);
        },
    );
}
