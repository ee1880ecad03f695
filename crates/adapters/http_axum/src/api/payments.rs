//! JSON REST handler for the caller's own payments.

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use registrar_app::ports::{IdentityVerifier, PaymentRepository, SemesterRepository};
use registrar_domain::payment::Payment;

use crate::auth::Caller;
use crate::envelope::Success;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// 200 OK with the caller's payments, newest first.
    Ok(Success<Vec<Payment>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(envelope) => envelope.into_response(),
        }
    }
}

/// `GET /api/student/payments`
///
/// Requires a bearer token naming a student. Store failures are reported
/// without detail.
pub async fn list<SR, PR, V>(
    State(state): State<AppState<SR, PR, V>>,
    Caller(credentials): Caller,
) -> Result<ListResponse, ApiError>
where
    SR: SemesterRepository + Send + Sync + 'static,
    PR: PaymentRepository + Send + Sync + 'static,
    V: IdentityVerifier + Send + Sync + 'static,
{
    let payments = state.payment_service.list_for_caller(credentials).await?;
    Ok(ListResponse::Ok(Success::new(payments)))
}
