//! JSON REST handlers for boards.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use bulletin_app::ports::BoardRepository;
use bulletin_domain::board::BoardDraft;
use bulletin_domain::error::{BulletinError, ValidationError};
use bulletin_domain::id::BoardId;
use bulletin_domain::page::{PageEnvelope, PageRequest, Sort};

use crate::error::ApiError;
use crate::state::AppState;

/// Base path re-encoded into the listing's self link.
const BASE_PATH: &str = "/api/boards";

/// Page size when the request does not specify one.
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query parameters for the list endpoint.
#[derive(Deserialize)]
pub struct ListQuery {
    /// Zero-based page number. Defaults to 0.
    pub page: Option<u32>,
    /// Page size. Defaults to [`DEFAULT_PAGE_SIZE`].
    pub size: Option<u32>,
    /// Sort spec, `field` or `field,asc|desc`.
    pub sort: Option<String>,
}

/// Request body for create and update.
///
/// Any server-assigned fields the client sends (`idx`, `createdDate`) are
/// dropped during deserialization.
#[derive(Deserialize)]
pub struct BoardPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<BoardPayload> for BoardDraft {
    fn from(payload: BoardPayload) -> Self {
        Self {
            title: payload.title,
            content: payload.content,
            author: payload.author,
        }
    }
}

/// The empty JSON object every successful mutation responds with.
///
/// Clients receive `{}` regardless of what was created or modified; the body
/// shape is part of the compatibility contract and must not be enriched.
#[derive(Serialize)]
struct Empty {}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<PageEnvelope>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created,
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => (StatusCode::CREATED, Json(Empty {})).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(Empty {}).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(Empty {}).into_response(),
        }
    }
}

/// Parse the `{idx}` path segment, returning a validation error on failure.
fn parse_idx(raw: &str) -> Result<BoardId, ApiError> {
    BoardId::from_str(raw).map_err(|_| {
        ApiError::from(BulletinError::Validation(ValidationError::InvalidId(
            raw.to_owned(),
        )))
    })
}

/// `GET /api/boards?page=&size=&sort=`
pub async fn list<BR>(
    State(state): State<AppState<BR>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    BR: BoardRepository + Send + Sync + 'static,
{
    let sort = query
        .sort
        .as_deref()
        .map(Sort::from_str)
        .transpose()
        .map_err(BulletinError::from)?;

    let request = PageRequest {
        number: query.page.unwrap_or(0),
        size: query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        sort,
    };

    let (items, total) = state.board_service.list_boards(request.clone()).await?;
    Ok(ListResponse::Ok(Json(PageEnvelope::new(
        items, &request, total, BASE_PATH,
    ))))
}

/// `POST /api/boards`
pub async fn create<BR>(
    State(state): State<AppState<BR>>,
    Json(payload): Json<BoardPayload>,
) -> Result<CreateResponse, ApiError>
where
    BR: BoardRepository + Send + Sync + 'static,
{
    state.board_service.create_board(payload.into()).await?;
    Ok(CreateResponse::Created)
}

/// `PUT /api/boards/{idx}`
pub async fn update<BR>(
    State(state): State<AppState<BR>>,
    Path(idx): Path<String>,
    Json(payload): Json<BoardPayload>,
) -> Result<UpdateResponse, ApiError>
where
    BR: BoardRepository + Send + Sync + 'static,
{
    let idx = parse_idx(&idx)?;
    state.board_service.update_board(idx, payload.into()).await?;
    Ok(UpdateResponse::Ok)
}

/// `DELETE /api/boards/{idx}`
pub async fn delete<BR>(
    State(state): State<AppState<BR>>,
    Path(idx): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    BR: BoardRepository + Send + Sync + 'static,
{
    let idx = parse_idx(&idx)?;
    state.board_service.delete_board(idx).await?;
    Ok(DeleteResponse::Ok)
}
