use palate_core::catalog::QuestionKind;
use palate_core::{CatalogStore, PalateError};
use palate_storage::{seed, InMemoryCatalog, SqliteCatalog};

// ── SQLite round-trips ────────────────────────────────────────────────────

#[test]
fn seeded_catalog_round_trips() {
    let catalog = SqliteCatalog::open_in_memory().unwrap();
    seed::seed_reference_catalog(&catalog).unwrap();

    let dishes = catalog.all_dishes().unwrap();
    assert_eq!(dishes.len(), 10);
    assert_eq!(dishes[0].name, "Pizza Margherita");

    let questions = catalog.all_questions().unwrap();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[1].attribute, "isVegetarian");
    assert_eq!(questions[1].kind, QuestionKind::Binary);
    assert_eq!(questions[1].choices, vec!["Yes", "No", "Don't Care"]);
}

#[test]
fn dish_fields_survive_storage() {
    let catalog = SqliteCatalog::open_in_memory().unwrap();
    seed::seed_reference_catalog(&catalog).unwrap();

    let pad_thai = catalog.dish_by_id(3).unwrap();
    assert_eq!(pad_thai.cuisine, "Thai");
    assert_eq!(pad_thai.spice_level, 3);
    assert!(pad_thai.is_gluten_free);
    assert!(pad_thai.mentions_ingredient("peanuts"));

    let cake = catalog.dish_by_id(9).unwrap();
    assert!(cake.is_vegetarian);
    assert_eq!(cake.meal_type, "dessert");
}

#[test]
fn missing_ids_are_not_found() {
    let catalog = SqliteCatalog::open_in_memory().unwrap();
    seed::seed_reference_catalog(&catalog).unwrap();

    assert!(matches!(
        catalog.dish_by_id(999),
        Err(PalateError::NotFound { entity: "dish", id: 999 })
    ));
    assert!(catalog.question_by_id(999).unwrap_err().is_not_found());
}

#[test]
fn open_on_disk_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    {
        let catalog = SqliteCatalog::open(&path).unwrap();
        seed::seed_reference_catalog(&catalog).unwrap();
    }

    let reopened = SqliteCatalog::open(&path).unwrap();
    assert_eq!(reopened.all_dishes().unwrap().len(), 10);
}

// ── In-memory store ───────────────────────────────────────────────────────

#[test]
fn in_memory_reference_matches_seed() {
    let mem = InMemoryCatalog::reference();
    assert_eq!(mem.all_dishes().unwrap().len(), 10);
    assert_eq!(mem.all_questions().unwrap().len(), 10);
    assert_eq!(mem.dish_by_id(5).unwrap().name, "Caesar Salad");
    assert!(mem.dish_by_id(42).is_err());
}

#[test]
fn vegetarian_reference_set_is_stable() {
    // Downstream scoring tests depend on this exact split.
    let veg: Vec<i64> = seed::reference_dishes()
        .iter()
        .filter(|d| d.is_vegetarian)
        .map(|d| d.id)
        .collect();
    assert_eq!(veg, vec![1, 4, 5, 9]);
}
