use bson::oid::ObjectId;

use crate::error::CoreError;

/// All document primary keys are MongoDB ObjectIds.
pub type DocId = ObjectId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a 24-hex-character id taken verbatim from a request path.
///
/// Anything that is not exactly a valid ObjectId hex string is rejected;
/// no trimming or case folding is applied.
pub fn parse_doc_id(raw: &str) -> Result<DocId, CoreError> {
    ObjectId::parse_str(raw).map_err(|_| CoreError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_valid_hex_id() {
        let id = parse_doc_id("65f1a2b3c4d5e6f708192a3b").unwrap();
        assert_eq!(id.to_hex(), "65f1a2b3c4d5e6f708192a3b");
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let id = parse_doc_id("65F1A2B3C4D5E6F708192A3B").unwrap();
        assert_eq!(id.to_hex(), "65f1a2b3c4d5e6f708192a3b");
    }

    #[test]
    fn too_short_is_rejected() {
        assert_matches!(parse_doc_id("65f1a2"), Err(CoreError::InvalidId(raw)) if raw == "65f1a2");
    }

    #[test]
    fn non_hex_is_rejected() {
        assert_matches!(
            parse_doc_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(CoreError::InvalidId(_))
        );
    }

    #[test]
    fn surrounding_whitespace_is_rejected() {
        assert_matches!(
            parse_doc_id(" 65f1a2b3c4d5e6f708192a3b"),
            Err(CoreError::InvalidId(_))
        );
    }

    #[test]
    fn empty_is_rejected() {
        assert_matches!(parse_doc_id(""), Err(CoreError::InvalidId(_)));
    }
}
