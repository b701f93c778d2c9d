//! Board — the persisted forum-post-like record this service manages.

use serde::{Deserialize, Serialize};

use crate::id::BoardId;
use crate::time::Timestamp;

/// A persisted board record.
///
/// `idx` and `created_date` are server-assigned: the store allocates the
/// identifier on insertion and the service stamps the creation time. Both are
/// immutable for the lifetime of the record. The remaining fields are opaque
/// client-supplied text, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub idx: BoardId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub created_date: Timestamp,
}

impl Board {
    /// Replace the client-supplied fields with the draft's values.
    ///
    /// `idx` and `created_date` are untouched; fields absent from the draft
    /// become absent on the record.
    pub fn apply(&mut self, draft: BoardDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
    }
}

/// The client-suppliable subset of a [`Board`].
///
/// Deserialization ignores unknown fields, so a payload carrying `idx` or
/// `createdDate` simply has those fields dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;

    fn persisted_board() -> Board {
        Board {
            idx: BoardId::new(1),
            title: Some("hello".to_string()),
            content: Some("first post".to_string()),
            author: Some("alice".to_string()),
            created_date: time::now(),
        }
    }

    #[test]
    fn should_preserve_idx_and_created_date_when_applying_draft() {
        let mut board = persisted_board();
        let idx = board.idx;
        let created = board.created_date;

        board.apply(BoardDraft {
            title: Some("bye".to_string()),
            content: None,
            author: Some("bob".to_string()),
        });

        assert_eq!(board.idx, idx);
        assert_eq!(board.created_date, created);
        assert_eq!(board.title.as_deref(), Some("bye"));
        assert_eq!(board.content, None);
        assert_eq!(board.author.as_deref(), Some("bob"));
    }

    #[test]
    fn should_serialize_created_date_under_camel_case_name() {
        let board = persisted_board();
        let json = serde_json::to_value(&board).unwrap();
        assert!(json.get("createdDate").is_some());
        assert!(json.get("created_date").is_none());
        assert_eq!(json["idx"], 1);
    }

    #[test]
    fn should_ignore_server_assigned_fields_when_deserializing_draft() {
        let draft: BoardDraft = serde_json::from_str(
            r#"{"idx": 99, "createdDate": "2020-01-01T00:00:00Z", "title": "hello"}"#,
        )
        .unwrap();
        assert_eq!(draft.title.as_deref(), Some("hello"));
        assert_eq!(draft.content, None);
        assert_eq!(draft.author, None);
    }

    #[test]
    fn should_roundtrip_board_through_serde_json() {
        let board = persisted_board();
        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
