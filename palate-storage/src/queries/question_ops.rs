//! Question CRUD. Choices are persisted as a comma-joined string.

use rusqlite::{params, Connection};

use palate_core::catalog::{Question, QuestionKind};
use palate_core::{PalateError, PalateResult};

use crate::to_storage_err;

/// Raw row before the kind string is validated.
type RawQuestion = (i64, String, String, String, String, u8);

fn to_question(raw: RawQuestion) -> PalateResult<Question> {
    let (id, text, kind, choices, attribute, weight) = raw;
    Ok(Question {
        id,
        text,
        kind: QuestionKind::parse(&kind)?,
        choices: choices
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        attribute,
        weight,
    })
}

/// Insert or replace a question.
pub fn insert_question(conn: &Connection, question: &Question) -> PalateResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO questions (id, text, kind, choices, attribute, weight) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            question.id,
            question.text,
            question.kind.as_str(),
            question.choices.join(","),
            question.attribute,
            question.weight as i64,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Fetch all questions ordered by id.
pub fn all_questions(conn: &Connection) -> PalateResult<Vec<Question>> {
    let mut stmt = conn
        .prepare("SELECT id, text, kind, choices, attribute, weight FROM questions ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, i64>(5)? as u8,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let raw = rows
        .collect::<Result<Vec<RawQuestion>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.into_iter().map(to_question).collect()
}

/// Fetch one question; `NotFound` when absent.
pub fn question_by_id(conn: &Connection, id: i64) -> PalateResult<Question> {
    let mut stmt = conn
        .prepare("SELECT id, text, kind, choices, attribute, weight FROM questions WHERE id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut rows = stmt
        .query_map(params![id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, i64>(5)? as u8,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    match rows.next() {
        Some(row) => to_question(row.map_err(|e| to_storage_err(e.to_string()))?),
        None => Err(PalateError::NotFound {
            entity: "question",
            id,
        }),
    }
}
