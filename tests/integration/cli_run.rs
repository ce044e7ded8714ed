//! Integration tests for the run context against datasets on disk

use super::test_utils::{shop, with_env, write_dataset};
use clap::Parser;
use prodtable::cli::{Cli, RunContext, NO_MATCHING_MESSAGE};
use prodtable::config::WORKSPACE_CONFIG_FILE;
use prodtable::error::ApiError;
use tempfile::TempDir;

fn run(args: &[&str], workspace: &TempDir) -> Result<String, ApiError> {
    let cli = Cli::try_parse_from(args).unwrap();
    let xdg = workspace.path().join("xdg");
    let mut result = None;
    with_env(
        &[
            ("XDG_CONFIG_HOME", Some(xdg.to_str().unwrap())),
            ("PRODTABLE__DATASET__PATH", None),
        ],
        || {
            result = Some(
                RunContext::new(workspace.path().to_path_buf(), cli.config.clone(), cli.data.clone())
                    .and_then(|ctx| ctx.execute(&cli.command)),
            );
        },
    );
    result.unwrap()
}

fn workspace_with_shop() -> TempDir {
    let workspace = TempDir::new().unwrap();
    shop().save_dir(&workspace.path().join("data")).unwrap();
    std::fs::write(
        workspace.path().join(WORKSPACE_CONFIG_FILE),
        "[display]\ncolor = false\npreset = \"ascii\"\n",
    )
    .unwrap();
    workspace
}

#[test]
fn test_list_text_uses_workspace_dataset() {
    let workspace = workspace_with_shop();
    let out = run(
        &["prodtable", "list", "--user", "Anna", "--sort", "product"],
        &workspace,
    )
    .unwrap();

    assert!(out.contains("Product ^"));
    assert!(out.contains("🍞 - Grocery"));
    let bread = out.find("Bread").unwrap();
    let eggs = out.find("Eggs").unwrap();
    assert!(bread < eggs);
    assert!(!out.contains("Milk"));
}

#[test]
fn test_list_json_with_categories_and_reverse() {
    let workspace = workspace_with_shop();
    let out = run(
        &[
            "prodtable",
            "list",
            "--category",
            "Fruits",
            "--category",
            "Drinks",
            "--sort",
            "id",
            "--reverse",
            "--format",
            "json",
        ],
        &workspace,
    )
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ids: Vec<u64> = value["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![6, 4, 3, 1]);
    assert_eq!(value["view"]["sort"]["column"], "id");
}

#[test]
fn test_list_no_matches_shows_message() {
    let workspace = workspace_with_shop();
    let out = run(&["prodtable", "list", "-q", "caviar"], &workspace).unwrap();
    assert_eq!(out, NO_MATCHING_MESSAGE);
}

#[test]
fn test_data_flag_overrides_config() {
    let workspace = TempDir::new().unwrap();
    let elsewhere = write_dataset(&shop());
    let data = elsewhere.path().to_string_lossy().to_string();

    let out = run(
        &["prodtable", "--data", data.as_str(), "filters", "--format", "json"],
        &workspace,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["users"].as_array().unwrap().len(), 3);
    assert_eq!(value["categories"][2]["title"], "Fruits");
}

#[test]
fn test_broken_reference_fails_at_load() {
    let workspace = workspace_with_shop();
    let mut dataset = shop();
    dataset.products[5].category_id = 77;
    dataset.save_dir(&workspace.path().join("data")).unwrap();

    let err = run(&["prodtable", "list"], &workspace).unwrap_err();
    assert!(matches!(err, ApiError::Join(_)));
}

#[test]
fn test_invalid_config_is_reported() {
    let workspace = workspace_with_shop();
    std::fs::write(
        workspace.path().join(WORKSPACE_CONFIG_FILE),
        "[display]\npreset = \"rounded\"\n",
    )
    .unwrap();

    let err = run(&["prodtable", "list"], &workspace).unwrap_err();
    match err {
        ApiError::ConfigError(msg) => assert!(msg.contains("rounded")),
        other => panic!("Expected config error, got {:?}", other),
    }
}

#[test]
fn test_dataset_path_resolution() {
    let workspace = TempDir::new().unwrap();
    shop().save_dir(&workspace.path().join("shop")).unwrap();
    std::fs::write(
        workspace.path().join(WORKSPACE_CONFIG_FILE),
        "[dataset]\npath = \"shop\"\n",
    )
    .unwrap();
    let elsewhere = write_dataset(&shop());
    let xdg = workspace.path().join("xdg");

    with_env(
        &[
            ("XDG_CONFIG_HOME", Some(xdg.to_str().unwrap())),
            ("PRODTABLE__DATASET__PATH", None),
        ],
        || {
            // Relative configured path resolves against the workspace.
            let ctx = RunContext::new(workspace.path().to_path_buf(), None, None).unwrap();
            assert_eq!(ctx.dataset_path(), workspace.path().join("shop").as_path());

            let ctx = RunContext::new(
                workspace.path().to_path_buf(),
                None,
                Some(elsewhere.path().to_path_buf()),
            )
            .unwrap();
            assert_eq!(ctx.dataset_path(), elsewhere.path());
        },
    );
}
