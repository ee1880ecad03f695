//! # registrar-domain
//!
//! Pure domain model for the registrar student-records service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Semesters** (academic terms, flagged active or inactive)
//! - Define **Payments** (records owned by a single student)
//! - Define **caller identity** (credentials presented by a request and the
//!   verifier's answer about who the caller is)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod identity;
pub mod time;

pub mod payment;
pub mod semester;
