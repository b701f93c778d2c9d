//! Board service — use-cases for managing boards.

use bulletin_domain::board::{Board, BoardDraft};
use bulletin_domain::error::{BulletinError, NotFoundError};
use bulletin_domain::id::BoardId;
use bulletin_domain::page::PageRequest;
use bulletin_domain::time;

use crate::ports::BoardRepository;

/// Application service for board CRUD operations.
///
/// The repository is injected once at construction and treated as immutable
/// thereafter. The service owns the fetch-or-fail policy: a missing `idx` on
/// update or delete is reported as [`BulletinError::NotFound`] before any
/// write happens.
pub struct BoardService<R> {
    repo: R,
}

impl<R: BoardRepository> BoardService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new board from a client draft.
    ///
    /// The creation time is stamped with the server clock here; whatever the
    /// client sent for it never reaches this point. The store assigns `idx`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_board(&self, draft: BoardDraft) -> Result<Board, BulletinError> {
        let created = self.repo.insert(draft, time::now()).await?;
        tracing::debug!(idx = %created.idx, "board created");
        Ok(created)
    }

    /// Fetch one page of boards plus the store-wide record count.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_boards(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<Board>, u64), BulletinError> {
        self.repo.find_page(request).await
    }

    /// Replace the client-supplied fields of an existing board.
    ///
    /// The record is fetched eagerly first; `idx` and `created_date` are
    /// preserved and the draft's fields are applied wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`BulletinError::NotFound`] when no board with `idx` exists,
    /// or a storage error from the repository.
    pub async fn update_board(
        &self,
        idx: BoardId,
        draft: BoardDraft,
    ) -> Result<Board, BulletinError> {
        let mut board = self.repo.get_by_idx(idx).await?.ok_or_else(|| {
            BulletinError::from(NotFoundError {
                entity: "Board",
                id: idx.to_string(),
            })
        })?;

        board.apply(draft);
        self.repo.update(board).await
    }

    /// Delete a board by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BulletinError::NotFound`] when no board with `idx` exists,
    /// or a storage error from the repository.
    pub async fn delete_board(&self, idx: BoardId) -> Result<(), BulletinError> {
        if self.repo.delete(idx).await? {
            tracing::debug!(idx = %idx, "board deleted");
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Board",
                id: idx.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletin_domain::time::Timestamp;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryBoardRepo {
        store: Mutex<Store>,
    }

    #[derive(Default)]
    struct Store {
        next_idx: i64,
        boards: BTreeMap<BoardId, Board>,
    }

    impl BoardRepository for InMemoryBoardRepo {
        fn insert(
            &self,
            draft: BoardDraft,
            created_date: Timestamp,
        ) -> impl Future<Output = Result<Board, BulletinError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.next_idx += 1;
            let board = Board {
                idx: BoardId::new(store.next_idx),
                title: draft.title,
                content: draft.content,
                author: draft.author,
                created_date,
            };
            store.boards.insert(board.idx, board.clone());
            async { Ok(board) }
        }

        fn find_page(
            &self,
            request: PageRequest,
        ) -> impl Future<Output = Result<(Vec<Board>, u64), BulletinError>> + Send {
            let store = self.store.lock().unwrap();
            let total = store.boards.len() as u64;
            let items: Vec<Board> = store
                .boards
                .values()
                .skip(request.number as usize * request.size as usize)
                .take(request.size as usize)
                .cloned()
                .collect();
            async move { Ok((items, total)) }
        }

        fn get_by_idx(
            &self,
            idx: BoardId,
        ) -> impl Future<Output = Result<Option<Board>, BulletinError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.boards.get(&idx).cloned();
            async { Ok(result) }
        }

        fn update(
            &self,
            board: Board,
        ) -> impl Future<Output = Result<Board, BulletinError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.boards.insert(board.idx, board.clone());
            async { Ok(board) }
        }

        fn delete(&self, idx: BoardId) -> impl Future<Output = Result<bool, BulletinError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.boards.remove(&idx).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> BoardService<InMemoryBoardRepo> {
        BoardService::new(InMemoryBoardRepo::default())
    }

    fn draft(title: &str) -> BoardDraft {
        BoardDraft {
            title: Some(title.to_string()),
            content: Some("body".to_string()),
            author: Some("alice".to_string()),
        }
    }

    fn first_page() -> PageRequest {
        PageRequest {
            number: 0,
            size: 10,
            sort: None,
        }
    }

    #[tokio::test]
    async fn should_assign_sequential_idx_starting_at_one() {
        let svc = make_service();
        let first = svc.create_board(draft("first")).await.unwrap();
        let second = svc.create_board(draft("second")).await.unwrap();
        assert_eq!(first.idx, BoardId::new(1));
        assert_eq!(second.idx, BoardId::new(2));
    }

    #[tokio::test]
    async fn should_stamp_created_date_with_server_clock() {
        let svc = make_service();
        let before = time::now();
        let created = svc.create_board(draft("hello")).await.unwrap();
        let after = time::now();
        assert!(created.created_date >= before);
        assert!(created.created_date <= after);
    }

    #[tokio::test]
    async fn should_list_boards_with_total_count() {
        let svc = make_service();
        for n in 0..3 {
            svc.create_board(draft(&format!("post {n}"))).await.unwrap();
        }

        let (items, total) = svc.list_boards(first_page()).await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn should_report_full_total_from_any_page() {
        let svc = make_service();
        for n in 0..5 {
            svc.create_board(draft(&format!("post {n}"))).await.unwrap();
        }

        let (items, total) = svc
            .list_boards(PageRequest {
                number: 2,
                size: 2,
                sort: None,
            })
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(total, 5);
    }

    #[tokio::test]
    async fn should_replace_fields_but_preserve_idx_and_created_date_on_update() {
        let svc = make_service();
        let created = svc.create_board(draft("hello")).await.unwrap();

        let updated = svc
            .update_board(
                created.idx,
                BoardDraft {
                    title: Some("bye".to_string()),
                    content: None,
                    author: Some("bob".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.idx, created.idx);
        assert_eq!(updated.created_date, created.created_date);
        assert_eq!(updated.title.as_deref(), Some("bye"));
        assert_eq!(updated.content, None);
        assert_eq!(updated.author.as_deref(), Some("bob"));

        let (items, _) = svc.list_boards(first_page()).await.unwrap();
        assert_eq!(items[0].title.as_deref(), Some("bye"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_board() {
        let svc = make_service();
        let result = svc.update_board(BoardId::new(999), draft("ghost")).await;
        assert!(matches!(result, Err(BulletinError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_board() {
        let svc = make_service();
        let created = svc.create_board(draft("doomed")).await.unwrap();

        svc.delete_board(created.idx).await.unwrap();

        let (items, total) = svc.list_boards(first_page()).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_board() {
        let svc = make_service();
        let result = svc.delete_board(BoardId::new(999)).await;
        assert!(matches!(result, Err(BulletinError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_not_fabricate_record_when_update_misses() {
        let svc = make_service();
        let _ = svc.update_board(BoardId::new(7), draft("ghost")).await;

        let (items, total) = svc.list_boards(first_page()).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 0);
    }
}
