pub mod health;
pub mod progress;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                    identity probe (GET)
/// /progress            list (GET), upsert (POST), reset all (DELETE)
/// /progress/{level}    get (GET), reset one (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    progress::router()
}
