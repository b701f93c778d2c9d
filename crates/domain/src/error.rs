//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BulletinError`] via `#[from]`. No `String` variants.

/// Top-level error type for the bulletin service.
#[derive(Debug, thiserror::Error)]
pub enum BulletinError {
    /// A request carried an invalid parameter.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Request parameter violations detected before touching storage.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The sort spec names an unknown field or direction.
    #[error("invalid sort spec: {0:?}")]
    InvalidSort(String),

    /// The path segment is not a valid board identifier.
    #[error("invalid board id: {0:?}")]
    InvalidId(String),
}

/// A lookup by identifier came back empty.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable record kind, e.g. `"Board"`.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}
