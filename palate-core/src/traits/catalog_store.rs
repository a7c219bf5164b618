use std::sync::Arc;

use crate::catalog::{Dish, Question};
use crate::errors::PalateResult;

/// Read-only storage collaborator: the engine's only external boundary.
///
/// Id lookups fail with `PalateError::NotFound` when absent; the engine
/// recovers from question misses locally (generic-scoring fallback) rather
/// than propagating them.
pub trait CatalogStore: Send + Sync {
    fn all_dishes(&self) -> PalateResult<Vec<Dish>>;
    fn dish_by_id(&self, id: i64) -> PalateResult<Dish>;
    fn all_questions(&self) -> PalateResult<Vec<Question>>;
    fn question_by_id(&self, id: i64) -> PalateResult<Question>;
}

/// Blanket impl: `Arc<T>` implements `CatalogStore` by delegating to the
/// inner `T`, so a shared store can back many sequential sessions.
impl<T: CatalogStore> CatalogStore for Arc<T> {
    fn all_dishes(&self) -> PalateResult<Vec<Dish>> {
        (**self).all_dishes()
    }
    fn dish_by_id(&self, id: i64) -> PalateResult<Dish> {
        (**self).dish_by_id(id)
    }
    fn all_questions(&self) -> PalateResult<Vec<Question>> {
        (**self).all_questions()
    }
    fn question_by_id(&self, id: i64) -> PalateResult<Question> {
        (**self).question_by_id(id)
    }
}
