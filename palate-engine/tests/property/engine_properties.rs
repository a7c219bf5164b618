//! Property tests: clamp invariants and recommendation idempotence under
//! arbitrary answer sequences.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use palate_core::EngineConfig;
use palate_engine::Recommender;
use palate_storage::InMemoryCatalog;

const ANSWERS: [&str; 4] = ["Yes", "No", "Don't Care", "Either is fine"];

proptest! {
    #[test]
    fn prop_scores_stay_clamped(
        steps in prop::collection::vec((0i64..7000, 0usize..4), 1..30),
        seed in 0u64..1000,
    ) {
        let catalog = InMemoryCatalog::reference();
        let mut rec = Recommender::new(&catalog, EngineConfig::default())
            .with_rng(StdRng::seed_from_u64(seed));
        rec.initialize_scores().unwrap();

        for (question_id, answer_idx) in steps {
            rec.process_answer(question_id, ANSWERS[answer_idx]);
            for (id, score) in rec.scores() {
                prop_assert!(
                    (0.01f32..=10.0f32).contains(&score),
                    "dish {id} escaped the clamp range: {score}"
                );
            }
        }
    }

    #[test]
    fn prop_initialization_is_uniform(seed in 0u64..1000) {
        let catalog = InMemoryCatalog::reference();
        let mut rec = Recommender::new(&catalog, EngineConfig::default())
            .with_rng(StdRng::seed_from_u64(seed));
        rec.initialize_scores().unwrap();

        let scores = rec.scores();
        prop_assert_eq!(scores.len(), 10);
        for (_, score) in scores {
            prop_assert_eq!(score, 1.0);
        }
    }

    #[test]
    fn prop_top_recommendations_idempotent(
        steps in prop::collection::vec((0i64..7000, 0usize..4), 0..15),
        seed in 0u64..1000,
    ) {
        let catalog = InMemoryCatalog::reference();
        let mut rec = Recommender::new(&catalog, EngineConfig::default())
            .with_rng(StdRng::seed_from_u64(seed));
        rec.initialize_scores().unwrap();

        for (question_id, answer_idx) in steps {
            rec.process_answer(question_id, ANSWERS[answer_idx]);
        }

        let first: Vec<i64> = rec.top_recommendations(5).iter().map(|d| d.id).collect();
        let second: Vec<i64> = rec.top_recommendations(5).iter().map(|d| d.id).collect();
        prop_assert_eq!(first, second);
    }
}
