//! # palate-engine
//!
//! Adaptive "20-questions"-style recommendation engine: maintains a live
//! score per candidate dish, selects the next most discriminating question
//! while avoiding contradictions and repetition, updates scores from
//! answers with a weighted multiplicative heuristic, and decides when to
//! stop and commit to a recommendation.
//!
//! ## Modules
//!
//! - `attributes` — table-driven attribute predicates with a per-session cache
//! - `pool` — dynamic question synthesis from the current candidate set
//! - `selector` — next-question choice: source bias, contradiction and
//!   recency filters, duplicate rejection
//! - `scoring` — the two multiplicative scoring paths (catalog / generic)
//! - `convergence` — plateau/margin stop test
//! - `session` — per-run mutable state with snapshot export/import
//! - `engine` — the `Recommender` facade orchestrating all of the above

pub mod attributes;
pub mod convergence;
pub mod engine;
pub mod pool;
pub mod scoring;
pub mod selector;
pub mod session;

pub use attributes::AttributeEvaluator;
pub use engine::Recommender;
pub use pool::QuestionPool;
pub use selector::SelectorPhase;
pub use session::SessionState;
