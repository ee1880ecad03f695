//! Shared application state for axum handlers.

use std::sync::Arc;

use registrar_app::ports::{IdentityVerifier, PaymentRepository, SemesterRepository};
use registrar_app::services::payment_service::PaymentService;
use registrar_app::services::semester_service::SemesterService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and verifier types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`. Only the `Arc` wrappers are cloned.
pub struct AppState<SR, PR, V> {
    /// Public semester listing.
    pub semester_service: Arc<SemesterService<SR>>,
    /// Caller-scoped payment listing.
    pub payment_service: Arc<PaymentService<PR, V>>,
}

impl<SR, PR, V> Clone for AppState<SR, PR, V> {
    fn clone(&self) -> Self {
        Self {
            semester_service: Arc::clone(&self.semester_service),
            payment_service: Arc::clone(&self.payment_service),
        }
    }
}

impl<SR, PR, V> AppState<SR, PR, V>
where
    SR: SemesterRepository + Send + Sync + 'static,
    PR: PaymentRepository + Send + Sync + 'static,
    V: IdentityVerifier + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        semester_service: SemesterService<SR>,
        payment_service: PaymentService<PR, V>,
    ) -> Self {
        Self {
            semester_service: Arc::new(semester_service),
            payment_service: Arc::new(payment_service),
        }
    }
}
