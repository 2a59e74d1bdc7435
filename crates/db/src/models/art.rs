//! Filter and update documents for the `arts` collection.

use artcraft_core::error::CoreError;
use artcraft_core::flags::parse_customization_flag;
use bson::{doc, Document};

/// Field holding the owner's email address.
pub const USER_EMAIL_FIELD: &str = "user_email";

/// Field holding the customizable flag.
pub const CUSTOMIZATION_FIELD: &str = "customization";

/// Equality filter over the two art fields clients can query by.
///
/// Unset fields do not constrain the result; an empty filter matches
/// every art.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtFilter {
    pub user_email: Option<String>,
    pub customization: Option<bool>,
}

impl ArtFilter {
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            user_email: Some(email.into()),
            customization: None,
        }
    }

    pub fn by_email_and_customization(email: impl Into<String>, customization: bool) -> Self {
        Self {
            user_email: Some(email.into()),
            customization: Some(customization),
        }
    }

    /// Filter for the `/arts/filter/{email}/{customizable}` path segments.
    pub fn from_route_segments(email: impl Into<String>, customizable: &str) -> Self {
        Self::by_email_and_customization(email, parse_customization_flag(customizable))
    }

    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(email) = &self.user_email {
            filter.insert(USER_EMAIL_FIELD, email.as_str());
        }
        if let Some(customization) = self.customization {
            filter.insert(CUSTOMIZATION_FIELD, customization);
        }
        filter
    }
}

/// Build the `$set` update used by the upsert route.
///
/// `_id` is dropped from the body since the path already fixes it and the
/// field is immutable. A body with nothing left to set is rejected.
pub fn set_update(mut fields: Document) -> Result<Document, CoreError> {
    fields.remove("_id");
    if fields.is_empty() {
        return Err(CoreError::InvalidDocument(
            "update body must contain at least one field besides _id".to_string(),
        ));
    }
    Ok(doc! { "$set": fields })
}
