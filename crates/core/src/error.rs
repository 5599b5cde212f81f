#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal error: {0}")]
    Internal(String),
}
