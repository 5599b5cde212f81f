//! Level progress models and DTOs.
//!
//! The stored row keeps `timestamp` as ISO-8601 text (the layout written by
//! every past version of the backend); the wire struct carries a structured
//! UTC instant and is what handlers serialize.

use bouncyball_core::types::Timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// A row from the `level_progress` table, timestamp still text-encoded.
#[derive(Debug, Clone, FromRow)]
pub struct LevelProgressRow {
    pub id: String,
    pub level: i64,
    pub stars: i32,
    pub attempts: i32,
    pub completed: bool,
    pub timestamp: String,
}

/// A level progress record as exposed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelProgress {
    pub id: String,
    pub level: i64,
    pub stars: i32,
    pub attempts: i32,
    pub completed: bool,
    pub timestamp: Timestamp,
}

impl LevelProgress {
    /// Build a new record with a fresh UUID and the current time.
    pub fn new(level: i64, stars: i32, attempts: i32, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            level,
            stars,
            attempts,
            completed,
            timestamp: Utc::now(),
        }
    }

    /// Default record for a level that has never been saved.
    ///
    /// Synthesized for reads of absent levels; never persisted.
    pub fn default_for_level(level: i64) -> Self {
        Self::new(level, 0, 0, false)
    }

    /// The timestamp in the text encoding used by the storage layout.
    pub fn timestamp_text(&self) -> String {
        self.timestamp.to_rfc3339()
    }
}

impl TryFrom<LevelProgressRow> for LevelProgress {
    type Error = chrono::ParseError;

    /// Normalize the text-encoded timestamp into a structured UTC instant.
    fn try_from(row: LevelProgressRow) -> Result<Self, Self::Error> {
        let timestamp = DateTime::parse_from_rfc3339(&row.timestamp)?.with_timezone(&Utc);
        Ok(Self {
            id: row.id,
            level: row.level,
            stars: row.stars,
            attempts: row.attempts,
            completed: row.completed,
            timestamp,
        })
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for saving progress for a level. All fields required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLevelProgress {
    pub level: i64,
    pub stars: i32,
    pub attempts: i32,
    pub completed: bool,
}

/// DTO for partially updating a record.
///
/// Reserved extension point: defined alongside the create DTO per module
/// convention, but no route accepts it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLevelProgress {
    pub stars: Option<i32>,
    pub attempts: Option<i32>,
    pub completed: Option<bool>,
}
