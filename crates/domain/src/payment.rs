//! Payment: a charge settled by one student.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RegistrarError, ValidationError, reserved_detail};
use crate::id::{PaymentId, StudentId};
use crate::time::{Timestamp, now};

/// Serialized names of the typed fields; details must not reuse them.
const FIELDS: &[&str] = &["id", "studentId", "amount", "currency", "createdAt"];

/// A payment made by a single student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub student_id: StudentId,
    /// Amount in minor currency units (cents).
    pub amount: i64,
    pub currency: String,
    pub created_at: Timestamp,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Payment {
    /// Create a builder for a payment owned by `student_id`.
    #[must_use]
    pub fn builder(student_id: StudentId) -> PaymentBuilder {
        PaymentBuilder {
            student_id,
            id: None,
            amount: 0,
            currency: None,
            created_at: None,
            details: Map::new(),
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCurrency`] when `currency` is empty, or
    /// [`ValidationError::ReservedDetail`] when a detail shadows a typed field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency.trim().is_empty() {
            return Err(ValidationError::EmptyCurrency);
        }
        reserved_detail(self.details.keys(), FIELDS)
    }
}

/// Step-by-step builder for [`Payment`].
#[derive(Debug)]
pub struct PaymentBuilder {
    student_id: StudentId,
    id: Option<PaymentId>,
    amount: i64,
    currency: Option<String>,
    created_at: Option<Timestamp>,
    details: Map<String, Value>,
}

impl PaymentBuilder {
    #[must_use]
    pub fn id(mut self, id: PaymentId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    #[must_use]
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Consume the builder, validate, and return a [`Payment`].
    ///
    /// `created_at` defaults to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Validation`] if `currency` is missing or empty,
    /// or if a detail reuses the name of a typed field.
    pub fn build(self) -> Result<Payment, RegistrarError> {
        let payment = Payment {
            id: self.id.unwrap_or_default(),
            student_id: self.student_id,
            amount: self.amount,
            currency: self.currency.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(now),
            details: self.details,
        };
        payment.validate()?;
        Ok(payment)
    }
}
