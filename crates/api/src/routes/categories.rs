//! Route definitions for the `categories` collection, mounted at `/categories`.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// ```text
/// GET /         -> list_categories
/// GET /id/{id}  -> get_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/id/{id}", get(categories::get_category))
}
