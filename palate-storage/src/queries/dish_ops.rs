//! Dish CRUD.

use rusqlite::{params, Connection, Row};

use palate_core::catalog::Dish;
use palate_core::{PalateError, PalateResult};

use crate::to_storage_err;

fn dish_from_row(row: &Row<'_>) -> rusqlite::Result<Dish> {
    Ok(Dish {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        cuisine: row.get(3)?,
        prep_time_mins: row.get::<_, i64>(4)? as u32,
        is_vegetarian: row.get(5)?,
        is_vegan: row.get(6)?,
        is_gluten_free: row.get(7)?,
        spice_level: row.get::<_, i64>(8)? as u8,
        sweet_level: row.get::<_, i64>(9)? as u8,
        savory_level: row.get::<_, i64>(10)? as u8,
        complexity: row.get::<_, i64>(11)? as u8,
        meal_type: row.get(12)?,
        serving_temperature: row.get(13)?,
        main_ingredients: row.get(14)?,
        cooking_methods: row.get(15)?,
        texture_profile: row.get(16)?,
        allergens: row.get(17)?,
    })
}

const DISH_COLUMNS: &str = "id, name, description, cuisine, prep_time_mins, is_vegetarian, \
     is_vegan, is_gluten_free, spice_level, sweet_level, savory_level, complexity, meal_type, \
     serving_temperature, main_ingredients, cooking_methods, texture_profile, allergens";

/// Insert or replace a dish.
pub fn insert_dish(conn: &Connection, dish: &Dish) -> PalateResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO dishes (id, name, description, cuisine, prep_time_mins, \
         is_vegetarian, is_vegan, is_gluten_free, spice_level, sweet_level, savory_level, \
         complexity, meal_type, serving_temperature, main_ingredients, cooking_methods, \
         texture_profile, allergens) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)",
        params![
            dish.id,
            dish.name,
            dish.description,
            dish.cuisine,
            dish.prep_time_mins as i64,
            dish.is_vegetarian,
            dish.is_vegan,
            dish.is_gluten_free,
            dish.spice_level as i64,
            dish.sweet_level as i64,
            dish.savory_level as i64,
            dish.complexity as i64,
            dish.meal_type,
            dish.serving_temperature,
            dish.main_ingredients,
            dish.cooking_methods,
            dish.texture_profile,
            dish.allergens,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Fetch all dishes ordered by id.
pub fn all_dishes(conn: &Connection) -> PalateResult<Vec<Dish>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {DISH_COLUMNS} FROM dishes ORDER BY id"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], dish_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Fetch one dish; `NotFound` when absent.
pub fn dish_by_id(conn: &Connection, id: i64) -> PalateResult<Dish> {
    let mut stmt = conn
        .prepare(&format!("SELECT {DISH_COLUMNS} FROM dishes WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![id], dish_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => row.map_err(|e| to_storage_err(e.to_string())),
        None => Err(PalateError::NotFound { entity: "dish", id }),
    }
}
