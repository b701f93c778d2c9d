//! Shared application state for axum handlers.

use std::sync::Arc;

use bulletin_app::ports::BoardRepository;
use bulletin_app::services::board_service::BoardService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be `Clone`
/// — only the `Arc` wrapper is cloned.
pub struct AppState<BR> {
    /// Board CRUD service.
    pub board_service: Arc<BoardService<BR>>,
}

impl<BR> Clone for AppState<BR> {
    fn clone(&self) -> Self {
        Self {
            board_service: Arc::clone(&self.board_service),
        }
    }
}

impl<BR> AppState<BR>
where
    BR: BoardRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(board_service: BoardService<BR>) -> Self {
        Self {
            board_service: Arc::new(board_service),
        }
    }
}
