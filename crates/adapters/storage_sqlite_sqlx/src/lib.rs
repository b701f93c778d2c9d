//! # bulletin-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `BoardRepository` port trait defined in `bulletin-app`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `bulletin-app` (for the port trait) and `bulletin-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod board_repo;
pub mod error;
pub mod pool;

pub use board_repo::SqliteBoardRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
