//! Full seeded session loop: initialize, ask/answer until convergence,
//! read the top recommendations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use palate_core::EngineConfig;
use palate_engine::Recommender;
use palate_storage::InMemoryCatalog;

fn full_session(c: &mut Criterion) {
    let catalog = InMemoryCatalog::reference();

    c.bench_function("full_session_loop", |b| {
        b.iter(|| {
            let mut rec = Recommender::new(&catalog, EngineConfig::default())
                .with_rng(StdRng::seed_from_u64(42));
            rec.initialize_scores().unwrap();

            let mut affirm = false;
            while !rec.has_confident_recommendation() {
                let Some(question) = rec.next_question() else {
                    break;
                };
                affirm = !affirm;
                rec.process_answer(question.id, if affirm { "Yes" } else { "No" });
            }
            black_box(rec.top_recommendations(5))
        })
    });
}

fn scoring_pass(c: &mut Criterion) {
    let catalog = InMemoryCatalog::reference();

    c.bench_function("attribute_weighted_answer", |b| {
        let mut rec = Recommender::new(&catalog, EngineConfig::default())
            .with_rng(StdRng::seed_from_u64(42));
        rec.initialize_scores().unwrap();
        b.iter(|| {
            rec.process_answer(black_box(1), black_box("Yes"));
        })
    });
}

criterion_group!(benches, full_session, scoring_pass);
criterion_main!(benches);
