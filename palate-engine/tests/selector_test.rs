use rand::rngs::StdRng;
use rand::SeedableRng;

use palate_core::constants::DYNAMIC_QUESTION_ID_START;
use palate_core::EngineConfig;
use palate_engine::Recommender;
use palate_storage::InMemoryCatalog;

fn initialized(catalog: &InMemoryCatalog, seed: u64) -> Recommender<'_> {
    let mut rec =
        Recommender::new(catalog, EngineConfig::default()).with_rng(StdRng::seed_from_u64(seed));
    rec.initialize_scores().unwrap();
    rec
}

// ── Source bias (ratio policy) ────────────────────────────────────────────

#[test]
fn early_rounds_prefer_the_catalog() {
    let catalog = InMemoryCatalog::reference();
    let mut rec = initialized(&catalog, 11);

    // Rounds 0 and 1: catalog questions.
    for _ in 0..2 {
        let q = rec.next_question().expect("catalog not exhausted");
        assert!(q.id < DYNAMIC_QUESTION_ID_START, "expected a catalog question");
        rec.process_answer(q.id, "Don't Care");
    }

    // Round 2 (not a multiple of 3): the dynamic source takes over.
    let q = rec.next_question().expect("dynamic pool not empty");
    assert!(q.id >= DYNAMIC_QUESTION_ID_START, "expected a dynamic question");
}

#[test]
fn every_third_round_returns_to_the_catalog() {
    let catalog = InMemoryCatalog::reference();
    let mut rec = initialized(&catalog, 13);

    // Advance to round 3.
    for _ in 0..3 {
        let q = rec.next_question().unwrap();
        rec.process_answer(q.id, "Don't Care");
    }

    let q = rec.next_question().expect("questions remain");
    assert!(
        q.id < DYNAMIC_QUESTION_ID_START,
        "round 3 should come from the catalog, got {}",
        q.id
    );
}

// ── Weight-ordered catalog picks ──────────────────────────────────────────

#[test]
fn first_question_is_the_highest_weight_catalog_entry() {
    let catalog = InMemoryCatalog::reference();
    let mut rec = initialized(&catalog, 17);

    // isVegetarian (9) and isDessert (9) lead the table; the stable sort
    // keeps catalog order, so question 2 wins.
    let q = rec.next_question().unwrap();
    assert_eq!(q.id, 2);
    assert_eq!(q.attribute, "isVegetarian");
}

#[test]
fn recent_categories_are_avoided() {
    let catalog = InMemoryCatalog::reference();
    let mut rec = initialized(&catalog, 19);

    let first = rec.next_question().unwrap();
    rec.process_answer(first.id, "No");

    let second = rec.next_question().unwrap();
    if second.id < DYNAMIC_QUESTION_ID_START {
        // Within the 3-question window the same category cannot repeat.
        use palate_engine::selector::category::extract_category;
        assert_ne!(
            extract_category(&first.attribute),
            extract_category(&second.attribute)
        );
    }
}

// ── Duplicate rejection across sources ────────────────────────────────────

#[test]
fn cuisine_attribute_is_never_probed_twice_across_spellings() {
    let catalog = InMemoryCatalog::reference();
    let mut rec = initialized(&catalog, 23);

    let mut asked_cuisines: Vec<String> = Vec::new();
    for _ in 0..30 {
        let Some(q) = rec.next_question() else { break };
        if let Some(c) = palate_engine::selector::dedup::cuisine_token(&q.attribute) {
            assert!(
                !asked_cuisines.contains(&c.to_string()),
                "cuisine {c} probed twice (attribute {})",
                q.attribute
            );
            asked_cuisines.push(c.to_string());
        }
        rec.process_answer(q.id, "Don't Care");
    }
}
