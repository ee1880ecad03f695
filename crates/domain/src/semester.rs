//! Semester: an academic term students enroll in and pay for.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RegistrarError, ValidationError, reserved_detail};
use crate::id::SemesterId;
use crate::time::{Timestamp, now};

/// Serialized names of the typed fields; details must not reuse them.
const FIELDS: &[&str] = &["id", "name", "isActive", "startDate", "endDate"];

/// An academic term.
///
/// Only semesters with `is_active` set are ever listed publicly, most recent
/// `start_date` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semester {
    pub id: SemesterId,
    pub name: String,
    pub is_active: bool,
    pub start_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    /// Descriptive fields owned by other parts of the application.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Semester {
    /// Create a builder for constructing a [`Semester`].
    #[must_use]
    pub fn builder() -> SemesterBuilder {
        SemesterBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] when `name` is empty, or
    /// [`ValidationError::ReservedDetail`] when a detail shadows a typed field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        reserved_detail(self.details.keys(), FIELDS)
    }
}

/// Step-by-step builder for [`Semester`].
#[derive(Debug, Default)]
pub struct SemesterBuilder {
    id: Option<SemesterId>,
    name: Option<String>,
    is_active: bool,
    start_date: Option<Timestamp>,
    end_date: Option<Timestamp>,
    details: Map<String, Value>,
}

impl SemesterBuilder {
    #[must_use]
    pub fn id(mut self, id: SemesterId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: Timestamp) -> Self {
        self.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Timestamp) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Attach an extra descriptive field.
    #[must_use]
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Consume the builder, validate, and return a [`Semester`].
    ///
    /// `start_date` defaults to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Validation`] if `name` is missing or empty, or
    /// if a detail reuses the name of a typed field.
    pub fn build(self) -> Result<Semester, RegistrarError> {
        let semester = Semester {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            is_active: self.is_active,
            start_date: self.start_date.unwrap_or_else(now),
            end_date: self.end_date,
            details: self.details,
        };
        semester.validate()?;
        Ok(semester)
    }
}
