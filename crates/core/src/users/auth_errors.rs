use thiserror::Error;

/// Authentication failures, worded for direct display to the user.
///
/// Clients show these messages as-is, so the texts stay stable and free of
/// internal detail. Anything unexpected goes through `Internal` and is mapped
/// to a generic message at the API boundary.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("An account with this email already exists.")]
    EmailTaken,

    #[error("Invalid email address.")]
    InvalidEmail,

    #[error("Password is too weak. Please choose a stronger password.")]
    WeakPassword,

    #[error("No account found with this email address.")]
    AccountNotFound,

    #[error("Incorrect password.")]
    IncorrectPassword,

    #[error("Authentication failed: {0}")]
    Internal(String),
}

impl AuthError {
    /// Credential errors are the caller's fault; `Internal` is ours.
    pub fn is_internal(&self) -> bool {
        matches!(self, AuthError::Internal(_))
    }
}
