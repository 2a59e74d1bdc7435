pub mod arts;
pub mod categories;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the collection route tree.
///
/// Route hierarchy:
///
/// ```text
/// /arts                                  list, create
/// /arts/id/{id}                          get, replace (upsert), delete
/// /arts/email/{email}                    list by owner email
/// /arts/filter/{email}/{customizable}    list by owner email + customization
///
/// /categories                            list
/// /categories/id/{id}                    get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/arts", arts::router())
        .nest("/categories", categories::router())
}
