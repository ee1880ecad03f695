//! Semester service: public listing of active terms.

use registrar_domain::error::RegistrarError;
use registrar_domain::semester::Semester;

use crate::ports::SemesterRepository;

/// Application service for semester queries.
pub struct SemesterService<R> {
    repo: R,
}

impl<R: SemesterRepository> SemesterService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List active semesters, most recent start date first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Semester>, RegistrarError> {
        self.repo.find_active().await
    }
}
