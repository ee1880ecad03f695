//! # registrar-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/api/semesters`, `/api/student/payments`)
//! - Extract caller credentials from the `Authorization` header
//! - Map application results into the uniform response envelope
//!   (`{ success, data }` or `{ success, message[, error] }`)
//!
//! ## Dependency rule
//! Depends on `registrar-app` (for port traits and services) and `registrar-domain`
//! (for domain types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod auth;
pub mod envelope;
pub mod error;
pub mod router;
pub mod state;
