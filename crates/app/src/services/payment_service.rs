//! Payment service: a student's own payment history.

use registrar_domain::error::RegistrarError;
use registrar_domain::identity::Credentials;
use registrar_domain::payment::Payment;

use crate::ports::{IdentityVerifier, PaymentRepository};

/// Application service that scopes payment queries to the verified caller.
pub struct PaymentService<R, V> {
    repo: R,
    verifier: V,
}

impl<R, V> PaymentService<R, V>
where
    R: PaymentRepository,
    V: IdentityVerifier,
{
    /// Create a new service backed by the given repository and verifier.
    pub fn new(repo: R, verifier: V) -> Self {
        Self { repo, verifier }
    }

    /// Verify the caller, then list the payments they own, newest first.
    ///
    /// The repository is not queried unless the caller resolves to a
    /// well-formed student identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Unauthorized`] when the caller cannot be
    /// identified, or a storage error from the repository.
    #[tracing::instrument(skip_all)]
    pub async fn list_for_caller(
        &self,
        credentials: Credentials,
    ) -> Result<Vec<Payment>, RegistrarError> {
        let verification = self.verifier.verify(credentials).await;
        let student_id = verification.student_id().inspect_err(|err| {
            tracing::debug!(error = %err, "caller refused");
        })?;
        self.repo.find_by_student(student_id).await
    }
}
