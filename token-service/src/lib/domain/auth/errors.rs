use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for user directory lookups
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}

/// Error for refresh-token store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Token store unavailable: {0}")]
    Unavailable(String),
}

/// Infrastructure failure during an auth operation.
///
/// Deliberately distinct from a denied [`AuthResult`](crate::auth::models::AuthResult):
/// a denial is a domain outcome with a user-visible message, while these
/// mean a collaborator broke and the request cannot be judged at all.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Token store error: {0}")]
    Store(#[from] StoreError),

    #[error("Token signing error: {0}")]
    Token(#[from] credentials::TokenError),

    #[error("Password verification error: {0}")]
    Password(#[from] credentials::PasswordError),
}
