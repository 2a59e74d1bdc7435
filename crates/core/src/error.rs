#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}
