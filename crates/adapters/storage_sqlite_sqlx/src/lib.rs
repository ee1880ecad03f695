//! # registrar-adapter-storage-sqlite-sqlx
//!
//! Document store built on `SQLite` with [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `registrar-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (open once, close on shutdown)
//! - Run embedded migrations
//! - Store each record as a JSON document next to the columns it is filtered
//!   and sorted by
//!
//! ## Dependency rule
//! Depends on `registrar-app` (for port traits) and `registrar-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod payment_repo;
pub mod pool;
pub mod semester_repo;

pub use error::StorageError;
pub use payment_repo::SqlitePaymentRepository;
pub use pool::{Config, Database};
pub use semester_repo::SqliteSemesterRepository;
