//! `SQLite` implementation of [`SemesterRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use registrar_app::ports::SemesterRepository;
use registrar_domain::error::RegistrarError;
use registrar_domain::semester::Semester;
use registrar_domain::time::sort_key;

use crate::error::StorageError;

/// Wrapper for decoding a stored document into a domain [`Semester`].
struct Wrapper(Semester);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let document: String = row.try_get("document")?;
        serde_json::from_str(&document)
            .map(Self)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))
    }
}

const INSERT: &str = r"
    INSERT INTO semesters (id, is_active, start_date_secs, start_date_nanos, document)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_ACTIVE: &str = r"
    SELECT document FROM semesters
    WHERE is_active = 1
    ORDER BY start_date_secs DESC, start_date_nanos DESC, id ASC
";

/// `SQLite`-backed semester collection.
pub struct SqliteSemesterRepository {
    pool: SqlitePool,
}

impl SqliteSemesterRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a semester document.
    ///
    /// Not part of the port: the HTTP surface is read-only, this exists for
    /// imports and fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the record is invalid, or if encoding or the
    /// insert fails.
    pub async fn insert(&self, semester: &Semester) -> Result<(), StorageError> {
        semester.validate()?;
        let document = serde_json::to_string(semester)?;
        let (secs, nanos) = sort_key(semester.start_date);

        sqlx::query(INSERT)
            .bind(semester.id.to_string())
            .bind(semester.is_active)
            .bind(secs)
            .bind(nanos)
            .bind(document)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl SemesterRepository for SqliteSemesterRepository {
    async fn find_active(&self) -> Result<Vec<Semester>, RegistrarError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ACTIVE)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
