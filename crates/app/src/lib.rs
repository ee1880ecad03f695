//! # registrar-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SemesterRepository`: read projection over the semester collection
//!   - `PaymentRepository`: read projection over the payment collection
//!   - `IdentityVerifier`: map request credentials to a caller identity
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SemesterService`: list active semesters
//!   - `PaymentService`: authenticate the caller, list their payments
//!
//! ## Dependency rule
//! Depends on `registrar-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
