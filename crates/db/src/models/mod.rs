//! Filter builders and acknowledgement DTOs.

pub mod ack;
pub mod art;

use artcraft_core::types::DocId;
use bson::{doc, Document};

/// Filter selecting a single document by primary key.
pub fn id_filter(id: DocId) -> Document {
    doc! { "_id": id }
}

#[cfg(test)]
mod tests {
    use bson::oid::ObjectId;

    use super::*;

    #[test]
    fn id_filter_uses_object_id() {
        let oid = ObjectId::new();
        assert_eq!(id_filter(oid), doc! { "_id": oid });
    }
}
