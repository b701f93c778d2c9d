//! JSON REST API handlers.

pub mod boards;

use axum::Router;
use axum::routing::{get, put};

use bulletin_app::ports::BoardRepository;

use crate::state::AppState;

/// Routes nested under `/api` by the router.
pub fn routes<BR>() -> Router<AppState<BR>>
where
    BR: BoardRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/boards", get(boards::list).post(boards::create))
        .route("/boards/{idx}", put(boards::update).delete(boards::delete))
}
