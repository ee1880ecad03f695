//! `SQLite` implementation of [`PaymentRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use registrar_app::ports::PaymentRepository;
use registrar_domain::error::RegistrarError;
use registrar_domain::id::StudentId;
use registrar_domain::payment::Payment;
use registrar_domain::time::sort_key;

use crate::error::StorageError;

struct Wrapper(Payment);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let document: String = row.try_get("document")?;
        serde_json::from_str(&document)
            .map(Self)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))
    }
}

const INSERT: &str = r"
    INSERT INTO payments (id, student_id, created_at_secs, created_at_nanos, document)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_BY_STUDENT: &str = r"
    SELECT document FROM payments
    WHERE student_id = ?
    ORDER BY created_at_secs DESC, created_at_nanos DESC, id ASC
";

/// `SQLite`-backed payment collection.
pub struct SqlitePaymentRepository {
    pool: SqlitePool,
}

impl SqlitePaymentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a payment document. Used for imports and fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the record is invalid, or if encoding or the
    /// insert fails.
    pub async fn insert(&self, payment: &Payment) -> Result<(), StorageError> {
        payment.validate()?;
        let document = serde_json::to_string(payment)?;
        let (secs, nanos) = sort_key(payment.created_at);

        sqlx::query(INSERT)
            .bind(payment.id.to_string())
            .bind(payment.student_id.to_string())
            .bind(secs)
            .bind(nanos)
            .bind(document)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl PaymentRepository for SqlitePaymentRepository {
    async fn find_by_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<Payment>, RegistrarError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STUDENT)
            .bind(student_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
