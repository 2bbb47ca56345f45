//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the binary.

use async_trait::async_trait;

use crate::models::{Board, BoardId};

/// Data persistence contract for boards.
///
/// Implementations own the persisted document exclusively; nothing else
/// mutates it. Ids handed out by `next_id` are never handed out again
/// until `clear` is called.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BoardRepo: Send + Sync {
    /// Returns the current counter value and persists the incremented one.
    async fn next_id(&self) -> anyhow::Result<BoardId>;

    /// All boards in insertion order. Missing or unreadable data yields an empty list.
    async fn find_all(&self) -> anyhow::Result<Vec<Board>>;
    async fn find_by_id(&self, id: BoardId) -> anyhow::Result<Option<Board>>;

    async fn save(&self, board: Board) -> anyhow::Result<Board>;

    /// Replaces the board stored under `id`. `None` when nothing matched.
    async fn update(&self, id: BoardId, board: Board) -> anyhow::Result<Option<Board>>;

    /// Removes the board stored under `id`. `false` when nothing matched.
    async fn delete(&self, id: BoardId) -> anyhow::Result<bool>;

    /// Drops every board and resets the id counter to 1.
    async fn clear(&self) -> anyhow::Result<()>;
}
