//! Route definitions for the level progress API, mounted at `/api`.

use axum::routing::get;
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Progress routes.
///
/// ```text
/// GET    /                  -> root (identity probe)
/// GET    /progress          -> list_progress
/// POST   /progress          -> save_progress
/// DELETE /progress          -> reset_all_progress
/// GET    /progress/{level}  -> get_level_progress
/// DELETE /progress/{level}  -> reset_level_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(progress::root))
        .route(
            "/progress",
            get(progress::list_progress)
                .post(progress::save_progress)
                .delete(progress::reset_all_progress),
        )
        .route(
            "/progress/{level}",
            get(progress::get_level_progress).delete(progress::reset_level_progress),
        )
}
