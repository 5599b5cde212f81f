//! Repository for the `level_progress` table.
//!
//! `save` semantics live in the API handler (lookup, decide, write); this
//! module only provides the individual storage operations. The lookup and
//! the subsequent write are separate statements with no transaction, so the
//! read-modify-write sequence in the handler is not atomic as a unit.

use sqlx::PgPool;

use crate::models::progress::{LevelProgress, LevelProgressRow};

/// Upper bound on a list-all fetch.
const LIST_LIMIT: i64 = 1000;

/// Column list for `level_progress` queries.
const COLUMNS: &str = "id, level, stars, attempts, completed, \"timestamp\"";

/// Provides data access for level progress records.
pub struct ProgressRepo;

impl ProgressRepo {
    /// List up to 1000 records in storage order, timestamps normalized.
    pub async fn list(pool: &PgPool) -> Result<Vec<LevelProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM level_progress LIMIT {LIST_LIMIT}");
        let rows = sqlx::query_as::<_, LevelProgressRow>(&query)
            .fetch_all(pool)
            .await?;

        rows.into_iter()
            .map(|row| LevelProgress::try_from(row).map_err(decode_error))
            .collect()
    }

    /// Find the record for a level.
    ///
    /// Returns `None` if the level has never been saved. If duplicate rows
    /// exist for the level (possible under concurrent first-saves), an
    /// arbitrary one is returned.
    pub async fn find_by_level(
        pool: &PgPool,
        level: i64,
    ) -> Result<Option<LevelProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM level_progress WHERE level = $1 LIMIT 1");
        let row = sqlx::query_as::<_, LevelProgressRow>(&query)
            .bind(level)
            .fetch_optional(pool)
            .await?;

        row.map(|r| LevelProgress::try_from(r).map_err(decode_error))
            .transpose()
    }

    /// Insert a full record. The timestamp is persisted as ISO-8601 text.
    pub async fn insert(pool: &PgPool, record: &LevelProgress) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO level_progress (id, level, stars, attempts, completed, \"timestamp\") \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&record.id)
        .bind(record.level)
        .bind(record.stars)
        .bind(record.attempts)
        .bind(record.completed)
        .bind(record.timestamp_text())
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Overwrite all business fields and the timestamp for a level.
    ///
    /// The `id` column is left untouched.
    pub async fn replace(
        pool: &PgPool,
        level: i64,
        stars: i32,
        attempts: i32,
        completed: bool,
        timestamp_text: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE level_progress SET \
                 stars = $2, attempts = $3, completed = $4, \"timestamp\" = $5 \
             WHERE level = $1",
        )
        .bind(level)
        .bind(stars)
        .bind(attempts)
        .bind(completed)
        .bind(timestamp_text)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Overwrite only the attempt count for a level.
    ///
    /// Stars, completion, and timestamp are left as stored.
    pub async fn update_attempts(
        pool: &PgPool,
        level: i64,
        attempts: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE level_progress SET attempts = $2 WHERE level = $1")
            .bind(level)
            .bind(attempts)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete the record for a level. Returns the number of rows removed.
    pub async fn delete_by_level(pool: &PgPool, level: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM level_progress WHERE level = $1")
            .bind(level)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete every record. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM level_progress")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Map a timestamp parse failure to a sqlx decode error so callers see one
/// error type for all storage reads.
fn decode_error(err: chrono::ParseError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}
