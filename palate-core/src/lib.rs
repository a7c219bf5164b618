//! # palate-core
//!
//! Foundation crate for the Palate recommendation engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod score;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::{Answer, Dish, Question, QuestionKind};
pub use config::EngineConfig;
pub use errors::{PalateError, PalateResult};
pub use score::Score;
pub use traits::CatalogStore;
