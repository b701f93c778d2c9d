//! # bulletin-domain
//!
//! Pure domain model for the bulletin board service.
//!
//! ## Responsibilities
//! - Foundational types: the board identifier, error conventions, timestamps
//! - Define the **Board** record and the client-suppliable **draft** subset
//! - Define pagination types: page requests, sort specs, and the response
//!   envelope with its self link
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod board;
pub mod error;
pub mod id;
pub mod page;
pub mod time;
