//! Storage port: read-only repository traits over the document store.
//!
//! Each method issues exactly one query and returns the whole result set or
//! an error; there is no partial result.

use std::future::Future;

use registrar_domain::error::RegistrarError;
use registrar_domain::id::StudentId;
use registrar_domain::payment::Payment;
use registrar_domain::semester::Semester;

/// Read access to the semester collection.
pub trait SemesterRepository {
    /// Every semester with the activity flag set, latest `start_date` first.
    fn find_active(&self) -> impl Future<Output = Result<Vec<Semester>, RegistrarError>> + Send;
}

/// Read access to the payment collection.
pub trait PaymentRepository {
    /// Every payment owned by `student_id`, newest `created_at` first.
    fn find_by_student(
        &self,
        student_id: StudentId,
    ) -> impl Future<Output = Result<Vec<Payment>, RegistrarError>> + Send;
}
