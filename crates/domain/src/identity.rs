//! Caller identity: what a request presents and what the verifier concludes.

use std::str::FromStr;

use crate::error::AuthError;
use crate::id::StudentId;

/// Credentials carried by an inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    bearer: Option<String>,
}

impl Credentials {
    /// Credentials for a request that presented nothing.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Credentials carrying a bearer token.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer: Some(token.into()),
        }
    }

    /// The bearer token, if one was presented.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.bearer.as_deref()
    }
}

/// Outcome reported by an identity verifier.
///
/// A successful verification may still lack a student identifier; callers
/// must go through [`Verification::student_id`] to obtain one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    pub success: bool,
    pub student_id: Option<String>,
}

impl Verification {
    /// The verifier refused the credentials.
    #[must_use]
    pub fn rejected() -> Self {
        Self::default()
    }

    /// The verifier accepted the credentials and named the student.
    #[must_use]
    pub fn verified(student_id: impl Into<String>) -> Self {
        Self {
            success: true,
            student_id: Some(student_id.into()),
        }
    }

    /// Resolve the verified student, failing closed.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Rejected`] when verification failed
    /// - [`AuthError::MissingIdentity`] when no identifier was reported
    /// - [`AuthError::MalformedIdentity`] when the identifier is not a valid key
    pub fn student_id(&self) -> Result<StudentId, AuthError> {
        if !self.success {
            return Err(AuthError::Rejected);
        }
        let raw = self
            .student_id
            .as_deref()
            .ok_or(AuthError::MissingIdentity)?;
        StudentId::from_str(raw).map_err(|_| AuthError::MalformedIdentity(raw.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_student_when_verified_with_valid_id() {
        let student = StudentId::new();
        let verification = Verification::verified(student.to_string());
        assert_eq!(verification.student_id(), Ok(student));
    }

    #[test]
    fn should_refuse_when_rejected() {
        assert_eq!(
            Verification::rejected().student_id(),
            Err(AuthError::Rejected)
        );
    }

    #[test]
    fn should_refuse_rejected_verification_even_with_id() {
        let verification = Verification {
            success: false,
            student_id: Some(StudentId::new().to_string()),
        };
        assert_eq!(verification.student_id(), Err(AuthError::Rejected));
    }

    #[test]
    fn should_refuse_success_without_identity() {
        let verification = Verification {
            success: true,
            student_id: None,
        };
        assert_eq!(verification.student_id(), Err(AuthError::MissingIdentity));
    }

    #[test]
    fn should_fail_closed_on_malformed_identity() {
        let verification = Verification::verified("64b7f0c2e1");
        assert_eq!(
            verification.student_id(),
            Err(AuthError::MalformedIdentity("64b7f0c2e1".to_string()))
        );
    }

    #[test]
    fn should_expose_bearer_token() {
        assert_eq!(Credentials::bearer("abc").token(), Some("abc"));
        assert_eq!(Credentials::anonymous().token(), None);
    }
}
