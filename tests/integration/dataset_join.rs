//! Integration tests for loading and joining datasets from disk

use super::test_utils::{category, shop, write_dataset};
use prodtable::dataset::{Dataset, PRODUCTS_FILE};
use prodtable::error::{DatasetError, JoinError};
use prodtable::join::join;

#[test]
fn test_saved_dataset_loads_back_and_joins() {
    let dataset = shop();
    let dir = write_dataset(&dataset);

    let loaded = Dataset::load_dir(dir.path()).unwrap();
    assert_eq!(loaded, dataset);

    let products = join(&loaded).unwrap();
    let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let milk = &products[0];
    assert_eq!(milk.category.title, "Drinks");
    assert_eq!(milk.user.name, "Roma");
    assert_eq!(milk.category_label(), "🍺 - Drinks");
}

#[test]
fn test_join_reports_first_unresolved_category() {
    let mut dataset = shop();
    dataset.products[2].category_id = 40;
    dataset.products[4].category_id = 50;

    let err = join(&dataset).unwrap_err();
    assert_eq!(
        err,
        JoinError::UnresolvedCategory {
            product_id: 3,
            category_id: 40
        }
    );
    assert!(err.to_string().starts_with("Unresolved reference"));
}

#[test]
fn test_join_reports_unresolved_owner() {
    let mut dataset = shop();
    dataset.categories.push(category(9, "Toys", "🧸", 99));
    dataset.products[0].category_id = 9;

    assert_eq!(
        join(&dataset).unwrap_err(),
        JoinError::UnresolvedOwner {
            category_id: 9,
            owner_id: 99
        }
    );
}

#[test]
fn test_products_file_must_be_an_array() {
    let dir = write_dataset(&shop());
    std::fs::write(dir.path().join(PRODUCTS_FILE), r#"{"id": 1}"#).unwrap();

    match Dataset::load_dir(dir.path()).unwrap_err() {
        DatasetError::Parse { path, .. } => assert!(path.ends_with(PRODUCTS_FILE)),
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unknown_sex_is_rejected() {
    let dir = write_dataset(&shop());
    std::fs::write(
        dir.path().join("users.json"),
        r#"[{"id": 1, "name": "Roma", "sex": "x"}]"#,
    )
    .unwrap();

    assert!(matches!(
        Dataset::load_dir(dir.path()),
        Err(DatasetError::Parse { .. })
    ));
}
