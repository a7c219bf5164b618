//! Catalog table DDL.

use rusqlite::Connection;

use palate_core::PalateResult;

use crate::to_storage_err;

/// Create the catalog tables if they do not exist.
pub fn create_tables(conn: &Connection) -> PalateResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS dishes (
            id                  INTEGER PRIMARY KEY,
            name                TEXT NOT NULL,
            description         TEXT NOT NULL DEFAULT '',
            cuisine             TEXT NOT NULL,
            prep_time_mins      INTEGER NOT NULL DEFAULT 0,
            is_vegetarian       INTEGER NOT NULL DEFAULT 0,
            is_vegan            INTEGER NOT NULL DEFAULT 0,
            is_gluten_free      INTEGER NOT NULL DEFAULT 0,
            spice_level         INTEGER NOT NULL DEFAULT 0,
            sweet_level         INTEGER NOT NULL DEFAULT 0,
            savory_level        INTEGER NOT NULL DEFAULT 0,
            complexity          INTEGER NOT NULL DEFAULT 1,
            meal_type           TEXT NOT NULL DEFAULT '',
            serving_temperature TEXT NOT NULL DEFAULT 'hot',
            main_ingredients    TEXT NOT NULL DEFAULT '',
            cooking_methods     TEXT NOT NULL DEFAULT '',
            texture_profile     TEXT NOT NULL DEFAULT '',
            allergens           TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS questions (
            id        INTEGER PRIMARY KEY,
            text      TEXT NOT NULL,
            kind      TEXT NOT NULL,
            choices   TEXT NOT NULL DEFAULT '',
            attribute TEXT NOT NULL,
            weight    INTEGER NOT NULL DEFAULT 1
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
