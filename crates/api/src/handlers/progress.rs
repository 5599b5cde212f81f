//! Handlers for the level progress API.
//!
//! `save_progress` is the one operation with a business rule: a save only
//! overwrites the stored star rating when it improves on it; otherwise just
//! the attempt count is recorded. The lookup and the write are two separate
//! store operations with no transaction, so two concurrent saves for one
//! level can race and the later write wins. That matches the documented
//! contract and is left as-is.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use bouncyball_core::error::CoreError;
use bouncyball_core::progress::{save_action, SaveAction};
use bouncyball_db::models::progress::{CreateLevelProgress, LevelProgress};
use bouncyball_db::repositories::ProgressRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Identity probe payload for `GET /api/`.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Deletion count payload for the reset endpoints.
#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

/// GET /api/
///
/// Health/identity probe.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Bouncy Ball Game API",
    })
}

/// GET /api/progress
///
/// List progress for all levels (at most 1000 records, storage order).
pub async fn list_progress(State(state): State<AppState>) -> AppResult<Json<Vec<LevelProgress>>> {
    let records = ProgressRepo::list(&state.pool).await?;
    Ok(Json(records))
}

/// GET /api/progress/{level}
///
/// Progress for a specific level. An unsaved level is masked by a
/// synthesized default (zero stars, zero attempts, not completed) that is
/// NOT persisted; this route never answers 404.
pub async fn get_level_progress(
    State(state): State<AppState>,
    Path(level): Path<i64>,
) -> AppResult<Json<LevelProgress>> {
    let record = ProgressRepo::find_by_level(&state.pool, level).await?;

    Ok(Json(
        record.unwrap_or_else(|| LevelProgress::default_for_level(level)),
    ))
}

/// POST /api/progress
///
/// Save or update level progress (upsert with the monotonic star rule).
pub async fn save_progress(
    State(state): State<AppState>,
    Json(input): Json<CreateLevelProgress>,
) -> AppResult<Json<LevelProgress>> {
    let existing = ProgressRepo::find_by_level(&state.pool, input.level).await?;

    match save_action(existing.map(|e| e.stars), input.stars) {
        SaveAction::Insert => {
            let record =
                LevelProgress::new(input.level, input.stars, input.attempts, input.completed);
            ProgressRepo::insert(&state.pool, &record).await?;

            tracing::info!(
                level = record.level,
                stars = record.stars,
                "Level progress created",
            );

            // The insert path returns the record as built, no re-read.
            return Ok(Json(record));
        }
        SaveAction::Replace => {
            let now = Utc::now();
            ProgressRepo::replace(
                &state.pool,
                input.level,
                input.stars,
                input.attempts,
                input.completed,
                &now.to_rfc3339(),
            )
            .await?;

            tracing::info!(
                level = input.level,
                stars = input.stars,
                "Level progress improved",
            );
        }
        SaveAction::AttemptsOnly => {
            ProgressRepo::update_attempts(&state.pool, input.level, input.attempts).await?;
        }
    }

    // Return the freshly re-read stored record.
    let updated = ProgressRepo::find_by_level(&state.pool, input.level)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "level {} record missing after update",
                input.level
            )))
        })?;

    Ok(Json(updated))
}

/// DELETE /api/progress/{level}
///
/// Reset progress for a specific level. Succeeds (with a zero count) when
/// the level was never saved.
pub async fn reset_level_progress(
    State(state): State<AppState>,
    Path(level): Path<i64>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = ProgressRepo::delete_by_level(&state.pool, level).await?;

    if deleted > 0 {
        tracing::info!(level, deleted, "Level progress reset");
    }

    Ok(Json(DeletedResponse { deleted }))
}

/// DELETE /api/progress
///
/// Reset all progress.
pub async fn reset_all_progress(
    State(state): State<AppState>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = ProgressRepo::delete_all(&state.pool).await?;

    tracing::info!(deleted, "All level progress reset");

    Ok(Json(DeletedResponse { deleted }))
}
