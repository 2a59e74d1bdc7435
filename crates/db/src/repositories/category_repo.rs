//! Repository for the `categories` collection. Read-only.

use artcraft_core::types::DocId;
use bson::Document;

use crate::models::id_filter;
use crate::{DbError, Gateway};

pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn list_all(gateway: &Gateway) -> Result<Vec<Document>, DbError> {
        super::find_all(&gateway.categories(), Document::new()).await
    }

    pub async fn find_by_id(gateway: &Gateway, id: DocId) -> Result<Option<Document>, DbError> {
        gateway.categories().find_one(id_filter(id)).await
    }
}
