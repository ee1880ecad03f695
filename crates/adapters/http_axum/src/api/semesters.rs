//! JSON REST handler for semesters.

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use registrar_app::ports::{IdentityVerifier, PaymentRepository, SemesterRepository};
use registrar_domain::semester::Semester;

use crate::envelope::Success;
use crate::error::ApiError;
use crate::state::AppState;

/// Envelope message when the semester query fails.
pub const FETCH_FAILED: &str = "Failed to fetch semesters";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    /// 200 OK with the active semesters, latest start first.
    Ok(Success<Vec<Semester>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(envelope) => envelope.into_response(),
        }
    }
}

/// `GET /api/semesters`
///
/// Public. Store failures are reported with their message under `error`.
pub async fn list<SR, PR, V>(
    State(state): State<AppState<SR, PR, V>>,
) -> Result<ListResponse, ApiError>
where
    SR: SemesterRepository + Send + Sync + 'static,
    PR: PaymentRepository + Send + Sync + 'static,
    V: IdentityVerifier + Send + Sync + 'static,
{
    let semesters = state
        .semester_service
        .list_active()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to fetch semesters");
            ApiError::detailed(FETCH_FAILED, &err)
        })?;
    Ok(ListResponse::Ok(Success::new(semesters)))
}
