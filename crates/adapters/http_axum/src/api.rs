//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod payments;
#[allow(clippy::missing_errors_doc)]
pub mod semesters;

use axum::Router;
use axum::routing::get;

use registrar_app::ports::{IdentityVerifier, PaymentRepository, SemesterRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR, PR, V>() -> Router<AppState<SR, PR, V>>
where
    SR: SemesterRepository + Send + Sync + 'static,
    PR: PaymentRepository + Send + Sync + 'static,
    V: IdentityVerifier + Send + Sync + 'static,
{
    Router::new()
        .route("/semesters", get(semesters::list::<SR, PR, V>))
        .route("/student/payments", get(payments::list::<SR, PR, V>))
}
