//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RegistrarError`] via `From`.

use std::error::Error as StdError;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The caller could not be identified.
    #[error("unauthorized")]
    Unauthorized(#[from] AuthError),

    /// The backing store failed to connect or answer a query.
    #[error("storage error: {0}")]
    Storage(Box<dyn StdError + Send + Sync>),
}

impl RegistrarError {
    /// Wrap any store-level failure.
    pub fn storage<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }
}

/// Domain invariant violations raised by builders.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("currency must not be empty")]
    EmptyCurrency,
    /// A free-form detail would shadow a named field once serialized.
    #[error("detail key `{0}` is reserved")]
    ReservedDetail(String),
}

/// Find the first detail key that collides with one of `reserved`.
pub(crate) fn reserved_detail<'a>(
    keys: impl IntoIterator<Item = &'a String>,
    reserved: &[&str],
) -> Result<(), ValidationError> {
    match keys.into_iter().find(|key| reserved.contains(&key.as_str())) {
        Some(key) => Err(ValidationError::ReservedDetail(key.clone())),
        None => Ok(()),
    }
}

/// Reasons a caller is refused access to student-scoped data.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// The verifier did not accept the credentials.
    #[error("credentials rejected")]
    Rejected,

    /// The verifier accepted the credentials but named no student.
    #[error("verified caller carries no student identifier")]
    MissingIdentity,

    /// The student identifier is not a valid key.
    #[error("malformed student identifier `{0}`")]
    MalformedIdentity(String),
}
