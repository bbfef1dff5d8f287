use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Stored credential is not valid base64: {0}")]
    InvalidEncoding(String),
}
