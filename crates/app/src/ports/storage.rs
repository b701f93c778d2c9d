//! Storage port — the repository trait for board persistence.

use std::future::Future;

use bulletin_domain::board::{Board, BoardDraft};
use bulletin_domain::error::BulletinError;
use bulletin_domain::id::BoardId;
use bulletin_domain::page::PageRequest;
use bulletin_domain::time::Timestamp;

/// Repository for persisting and querying [`Board`]s.
pub trait BoardRepository {
    /// Insert a new board, letting the store assign its `idx`.
    ///
    /// Returns the persisted record including the assigned identifier.
    fn insert(
        &self,
        draft: BoardDraft,
        created_date: Timestamp,
    ) -> impl Future<Output = Result<Board, BulletinError>> + Send;

    /// Fetch one page of boards plus the store-wide record count.
    ///
    /// Items are ordered per the request's sort spec, defaulting to
    /// insertion order (`idx` ascending).
    fn find_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<(Vec<Board>, u64), BulletinError>> + Send;

    /// Get a board by its identifier, eagerly.
    fn get_by_idx(
        &self,
        idx: BoardId,
    ) -> impl Future<Output = Result<Option<Board>, BulletinError>> + Send;

    /// Overwrite an existing board record.
    fn update(&self, board: Board) -> impl Future<Output = Result<Board, BulletinError>> + Send;

    /// Delete a board by its identifier.
    ///
    /// Returns whether a record was actually removed.
    fn delete(&self, idx: BoardId) -> impl Future<Output = Result<bool, BulletinError>> + Send;
}
