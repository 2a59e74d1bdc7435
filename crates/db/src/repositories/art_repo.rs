//! Repository for the `arts` collection.

use artcraft_core::error::CoreError;
use artcraft_core::types::DocId;
use bson::Document;

use crate::models::ack::{DeleteAck, InsertAck, UpdateAck};
use crate::models::art::{set_update, ArtFilter};
use crate::models::id_filter;
use crate::{DbError, Gateway};

/// Errors from operations that build an update document before writing.
#[derive(Debug, thiserror::Error)]
pub enum UpsertError {
    #[error(transparent)]
    Document(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DbError),
}

/// Provides CRUD operations for art documents.
pub struct ArtRepo;

impl ArtRepo {
    /// Insert a new art document, returning the generated id.
    pub async fn create(gateway: &Gateway, art: Document) -> Result<InsertAck, DbError> {
        let result = gateway.arts().insert_one(art).await?;
        tracing::debug!(inserted_id = %result.inserted_id, "Art inserted");
        Ok(result.into())
    }

    /// List every art document in natural order.
    pub async fn list_all(gateway: &Gateway) -> Result<Vec<Document>, DbError> {
        super::find_all(&gateway.arts(), Document::new()).await
    }

    /// List art documents matching an email / customization filter.
    pub async fn list_filtered(
        gateway: &Gateway,
        filter: &ArtFilter,
    ) -> Result<Vec<Document>, DbError> {
        super::find_all(&gateway.arts(), filter.to_document()).await
    }

    /// Find an art document by id. Returns `None` when absent.
    pub async fn find_by_id(gateway: &Gateway, id: DocId) -> Result<Option<Document>, DbError> {
        gateway.arts().find_one(id_filter(id)).await
    }

    /// Set the given fields on the art with `id`, creating it if missing.
    pub async fn upsert(
        gateway: &Gateway,
        id: DocId,
        fields: Document,
    ) -> Result<UpdateAck, UpsertError> {
        let update = set_update(fields)?;
        let result = gateway
            .arts()
            .update_one(id_filter(id), update)
            .upsert(true)
            .await?;
        tracing::debug!(
            %id,
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "Art upserted",
        );
        Ok(result.into())
    }

    /// Delete the art with `id`. A missing id reports zero deletions.
    pub async fn delete(gateway: &Gateway, id: DocId) -> Result<DeleteAck, DbError> {
        let result = gateway.arts().delete_one(id_filter(id)).await?;
        tracing::debug!(%id, deleted = result.deleted_count, "Art delete");
        Ok(result.into())
    }
}
