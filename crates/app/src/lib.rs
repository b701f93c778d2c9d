//! # bulletin-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement:
//!   `BoardRepository` — CRUD plus paged queries for boards
//! - Provide the `BoardService` use-case layer: stamp creation times, enforce
//!   the fetch-or-fail policy for updates and deletes, delegate persistence
//!
//! ## Dependency rule
//! Depends on `bulletin-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
