//! Route definitions for the `arts` collection, mounted at `/arts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::arts;
use crate::state::AppState;

/// ```text
/// GET    /                              -> list_arts
/// POST   /                              -> create_art
/// GET    /id/{id}                       -> get_art
/// PUT    /id/{id}                       -> upsert_art
/// DELETE /id/{id}                       -> delete_art
/// GET    /email/{email}                 -> list_arts_by_email
/// GET    /filter/{email}/{customizable} -> filter_arts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(arts::list_arts).post(arts::create_art))
        .route(
            "/id/{id}",
            get(arts::get_art)
                .put(arts::upsert_art)
                .delete(arts::delete_art),
        )
        .route("/email/{email}", get(arts::list_arts_by_email))
        .route("/filter/{email}/{customizable}", get(arts::filter_arts))
}
