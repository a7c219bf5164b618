//! In-memory catalog store for tests and examples.

use palate_core::catalog::{Dish, Question};
use palate_core::{CatalogStore, PalateError, PalateResult};

use crate::seed;

/// Vec-backed `CatalogStore`. No I/O, no persistence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    dishes: Vec<Dish>,
    questions: Vec<Question>,
}

impl InMemoryCatalog {
    pub fn new(dishes: Vec<Dish>, questions: Vec<Question>) -> Self {
        Self { dishes, questions }
    }

    /// The seeded 10-dish / 10-question reference catalog.
    pub fn reference() -> Self {
        Self::new(seed::reference_dishes(), seed::reference_questions())
    }
}

impl CatalogStore for InMemoryCatalog {
    fn all_dishes(&self) -> PalateResult<Vec<Dish>> {
        Ok(self.dishes.clone())
    }

    fn dish_by_id(&self, id: i64) -> PalateResult<Dish> {
        self.dishes
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(PalateError::NotFound { entity: "dish", id })
    }

    fn all_questions(&self) -> PalateResult<Vec<Question>> {
        Ok(self.questions.clone())
    }

    fn question_by_id(&self, id: i64) -> PalateResult<Question> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(PalateError::NotFound {
                entity: "question",
                id,
            })
    }
}
