//! Read-only handlers for the `categories` collection.

use artcraft_core::document::document_to_json;
use artcraft_core::types::parse_doc_id;
use artcraft_db::repositories::CategoryRepo;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use super::documents_json;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.gateway).await?;

    Ok(Json(documents_json(categories)))
}

/// GET /categories/id/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_doc_id(&id)?;
    let category = CategoryRepo::find_by_id(&state.gateway, id).await?;

    Ok(Json(category.map(document_to_json)))
}
