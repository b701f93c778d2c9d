//! `SQLite` implementation of [`BoardRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bulletin_app::ports::BoardRepository;
use bulletin_domain::board::{Board, BoardDraft};
use bulletin_domain::error::BulletinError;
use bulletin_domain::id::BoardId;
use bulletin_domain::page::{PageRequest, Sort, SortDirection, SortField};
use bulletin_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Board`]s.
struct Wrapper(Board);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Board> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let idx: i64 = row.try_get("idx")?;
        let title: Option<String> = row.try_get("title")?;
        let content: Option<String> = row.try_get("content")?;
        let author: Option<String> = row.try_get("author")?;
        let created_date: Timestamp = row.try_get("created_date")?;

        Ok(Self(Board {
            idx: BoardId::new(idx),
            title,
            content,
            author,
            created_date,
        }))
    }
}

const INSERT: &str = "INSERT INTO boards (title, content, author, created_date) VALUES (?, ?, ?, ?)";
const SELECT_BY_IDX: &str = "SELECT * FROM boards WHERE idx = ?";
const COUNT_ALL: &str = "SELECT COUNT(*) FROM boards";
const UPDATE: &str = "UPDATE boards SET title = ?, content = ?, author = ? WHERE idx = ?";
const DELETE_BY_IDX: &str = "DELETE FROM boards WHERE idx = ?";

/// Resolve the ORDER BY column and direction for a sort spec.
///
/// Only whitelisted [`SortField`]s exist, so the returned column name is a
/// static string and never comes from raw client input.
fn order_by(sort: Option<Sort>) -> (&'static str, &'static str) {
    match sort {
        None => ("idx", "ASC"),
        Some(Sort { field, direction }) => {
            let column = match field {
                SortField::Idx => "idx",
                SortField::Title => "title",
                SortField::Author => "author",
                SortField::CreatedDate => "created_date",
            };
            let keyword = match direction {
                SortDirection::Ascending => "ASC",
                SortDirection::Descending => "DESC",
            };
            (column, keyword)
        }
    }
}

/// `SQLite`-backed board repository.
pub struct SqliteBoardRepository {
    pool: SqlitePool,
}

impl SqliteBoardRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl BoardRepository for SqliteBoardRepository {
    fn insert(
        &self,
        draft: BoardDraft,
        created_date: Timestamp,
    ) -> impl Future<Output = Result<Board, BulletinError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&draft.title)
                .bind(&draft.content)
                .bind(&draft.author)
                .bind(created_date)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Board {
                idx: BoardId::new(result.last_insert_rowid()),
                title: draft.title,
                content: draft.content,
                author: draft.author,
                created_date,
            })
        }
    }

    fn find_page(
        &self,
        request: PageRequest,
    ) -> impl Future<Output = Result<(Vec<Board>, u64), BulletinError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (column, keyword) = order_by(request.sort);
            let select = format!(
                "SELECT * FROM boards ORDER BY {column} {keyword}, idx ASC LIMIT ? OFFSET ?"
            );
            let limit = i64::from(request.size);
            let offset = i64::from(request.number) * i64::from(request.size);

            let rows: Vec<Wrapper> = sqlx::query_as(&select)
                .bind(limit)
                .bind(offset)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let count: i64 = sqlx::query_scalar(COUNT_ALL)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            let items = rows.into_iter().map(|w| w.0).collect();
            Ok((items, u64::try_from(count).unwrap_or(0)))
        }
    }

    fn get_by_idx(
        &self,
        idx: BoardId,
    ) -> impl Future<Output = Result<Option<Board>, BulletinError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_IDX)
                .bind(idx.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(&self, board: Board) -> impl Future<Output = Result<Board, BulletinError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&board.title)
                .bind(&board.content)
                .bind(&board.author)
                .bind(board.idx.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(board)
        }
    }

    fn delete(&self, idx: BoardId) -> impl Future<Output = Result<bool, BulletinError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_IDX)
                .bind(idx.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
