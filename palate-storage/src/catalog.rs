//! SQLite-backed catalog store.
//!
//! Reads are serialized through a mutex; the engine accesses the store
//! sequentially (one session per caller), so there is no reader pool.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::info;

use palate_core::catalog::{Dish, Question};
use palate_core::{CatalogStore, PalateResult};

use crate::queries::{dish_ops, question_ops};
use crate::schema;
use crate::to_storage_err;

/// Catalog store over a SQLite database file (or `:memory:`).
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    /// Open (creating tables if needed) a catalog database at `path`.
    pub fn open(path: impl AsRef<Path>) -> PalateResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        schema::create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a fresh in-memory catalog. Used by tests and benches.
    pub fn open_in_memory() -> PalateResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        schema::create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Bulk-insert dishes.
    pub fn insert_dishes(&self, dishes: &[Dish]) -> PalateResult<usize> {
        let conn = self.conn.lock().expect("catalog mutex poisoned");
        for dish in dishes {
            dish_ops::insert_dish(&conn, dish)?;
        }
        info!(count = dishes.len(), "inserted dishes");
        Ok(dishes.len())
    }

    /// Bulk-insert questions.
    pub fn insert_questions(&self, questions: &[Question]) -> PalateResult<usize> {
        let conn = self.conn.lock().expect("catalog mutex poisoned");
        for question in questions {
            question_ops::insert_question(&conn, question)?;
        }
        info!(count = questions.len(), "inserted questions");
        Ok(questions.len())
    }
}

impl CatalogStore for SqliteCatalog {
    fn all_dishes(&self) -> PalateResult<Vec<Dish>> {
        let conn = self.conn.lock().expect("catalog mutex poisoned");
        dish_ops::all_dishes(&conn)
    }

    fn dish_by_id(&self, id: i64) -> PalateResult<Dish> {
        let conn = self.conn.lock().expect("catalog mutex poisoned");
        dish_ops::dish_by_id(&conn, id)
    }

    fn all_questions(&self) -> PalateResult<Vec<Question>> {
        let conn = self.conn.lock().expect("catalog mutex poisoned");
        question_ops::all_questions(&conn)
    }

    fn question_by_id(&self, id: i64) -> PalateResult<Question> {
        let conn = self.conn.lock().expect("catalog mutex poisoned");
        question_ops::question_by_id(&conn, id)
    }
}
