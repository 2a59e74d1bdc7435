//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&Gateway` as the first argument.

pub mod art_repo;
pub mod category_repo;

pub use art_repo::ArtRepo;
pub use art_repo::UpsertError;
pub use category_repo::CategoryRepo;

use bson::Document;
use futures::TryStreamExt;
use mongodb::Collection;

use crate::DbError;

/// Drain every document matching `filter` into memory.
async fn find_all(
    collection: &Collection<Document>,
    filter: Document,
) -> Result<Vec<Document>, DbError> {
    collection.find(filter).await?.try_collect().await
}
